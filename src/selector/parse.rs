//! String form of [`Selector`].
//!
//! Grammar (a small CSS subset):
//!
//! ```text
//! selector := compound (WS+ compound)*
//! compound := TAG? (CLASS | ID | ATTR)*          -- at least one part
//! CLASS    := '.' IDENT
//! ID       := '#' IDENT
//! ATTR     := '[' IDENT ( '=' VALUE )? ']'
//! VALUE    := IDENT | '"' [^"]* '"' | '\'' [^']* '\''
//! ```
//!
//! Whitespace between compounds is the descendant combinator. Selector lists
//! (commas) are handled by [`super::parse_list`].

use super::Selector;
use crate::error::{Error, Result};

/// Parse one selector.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] on empty input, stray characters,
/// unterminated attribute clauses, or unsupported combinators.
pub fn parse(input: &str) -> Result<Selector> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::selector(input, "empty selector"));
    }

    let mut result: Option<Selector> = None;
    for part in split_compounds(trimmed, input)? {
        let compound = parse_compound(&part, input)?;
        result = Some(match result {
            None => compound,
            Some(ancestor) => Selector::Descendant {
                ancestor: Box::new(ancestor),
                target: Box::new(compound),
            },
        });
    }

    result.ok_or_else(|| Error::selector(input, "empty selector"))
}

/// Whether `s` can be written without quotes in the string form.
pub(crate) fn is_plain_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Split on whitespace that is not inside an attribute clause.
fn split_compounds(s: &str, input: &str) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_brackets = false;

    for c in s.chars() {
        match c {
            '\'' | '"' if in_brackets => {
                match quote {
                    Some(q) if q == c => quote = None,
                    None => quote = Some(c),
                    Some(_) => {}
                }
                current.push(c);
            }
            '[' if quote.is_none() => {
                in_brackets = true;
                current.push(c);
            }
            ']' if quote.is_none() => {
                in_brackets = false;
                current.push(c);
            }
            '>' | '+' | '~' | ',' if !in_brackets => {
                return Err(Error::selector(input, format!("unsupported combinator '{c}'")));
            }
            c if c.is_whitespace() && !in_brackets => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_brackets || quote.is_some() {
        return Err(Error::selector(input, "unterminated attribute clause"));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

fn parse_compound(part: &str, input: &str) -> Result<Selector> {
    let chars: Vec<char> = part.chars().collect();
    let mut clauses = Vec::new();
    let mut i = 0;

    // Optional leading tag name.
    let tag_end = chars.iter().position(|c| !is_ident_char(*c)).unwrap_or(chars.len());
    if tag_end > 0 {
        let tag: String = chars[..tag_end].iter().collect();
        clauses.push(Selector::tag(&tag));
        i = tag_end;
    } else if chars.first() == Some(&'*') {
        i = 1;
    }

    while i < chars.len() {
        match chars[i] {
            '.' | '#' => {
                let kind = chars[i];
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident_char(chars[end]) {
                    end += 1;
                }
                if end == start {
                    return Err(Error::selector(input, format!("expected name after '{kind}'")));
                }
                let name: String = chars[start..end].iter().collect();
                clauses.push(if kind == '.' {
                    Selector::class(&name)
                } else {
                    Selector::id(&name)
                });
                i = end;
            }
            '[' => {
                let close = chars[i..]
                    .iter()
                    .position(|c| *c == ']')
                    .map(|offset| i + offset)
                    .ok_or_else(|| Error::selector(input, "unterminated attribute clause"))?;
                let body: String = chars[i + 1..close].iter().collect();
                clauses.push(parse_attribute(&body, input)?);
                i = close + 1;
            }
            c => {
                return Err(Error::selector(input, format!("unexpected character '{c}'")));
            }
        }
    }

    match clauses.len() {
        0 => Err(Error::selector(input, "empty compound")),
        1 => Ok(clauses.remove(0)),
        _ => Ok(Selector::Compound(clauses)),
    }
}

fn parse_attribute(body: &str, input: &str) -> Result<Selector> {
    let Some((name, raw_value)) = body.split_once('=') else {
        let name = body.trim();
        if !is_plain_ident(name) {
            return Err(Error::selector(input, format!("bad attribute name {name:?}")));
        }
        return Ok(Selector::attr(name, None));
    };

    let name = name.trim();
    if !is_plain_ident(name) {
        return Err(Error::selector(input, format!("bad attribute name {name:?}")));
    }

    let raw_value = raw_value.trim();
    let value = if let Some(inner) = strip_quotes(raw_value, '"').or_else(|| strip_quotes(raw_value, '\'')) {
        inner
    } else if is_plain_ident(raw_value) {
        raw_value
    } else {
        return Err(Error::selector(input, format!("bad attribute value {raw_value:?}")));
    };

    Ok(Selector::attr(name, Some(value)))
}

fn strip_quotes(s: &str, quote: char) -> Option<&str> {
    s.strip_prefix(quote)?.strip_suffix(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_tag() {
        assert!(matches!(parse("article"), Ok(Selector::Tag(t)) if t == "article"));
    }

    #[test]
    fn parses_class_and_id() {
        assert!(matches!(parse(".c-entry-content"), Ok(Selector::Class(c)) if c == "c-entry-content"));
        assert!(matches!(
            parse("#main-content"),
            Ok(Selector::Attribute { name, value: Some(v) }) if name == "id" && v == "main-content"
        ));
    }

    #[test]
    fn parses_compound_tag_class() {
        let parsed = parse("section.related-news").ok();
        assert_eq!(
            parsed,
            Some(Selector::Compound(vec![
                Selector::tag("section"),
                Selector::class("related-news"),
            ]))
        );
    }

    #[test]
    fn parses_quoted_attribute_values() {
        let expected = Some(Selector::Compound(vec![
            Selector::tag("button"),
            Selector::attr("data-testid", Some("CLOSE")),
        ]));
        assert_eq!(parse("button[data-testid='CLOSE']").ok(), expected);
        assert_eq!(parse(r#"button[data-testid="CLOSE"]"#).ok(), expected);
        assert_eq!(parse("button[data-testid=CLOSE]").ok(), expected);
    }

    #[test]
    fn quoted_value_may_contain_spaces() {
        let parsed = parse("[aria-label='Close dialog']").ok();
        assert_eq!(parsed, Some(Selector::attr("aria-label", Some("Close dialog"))));
    }

    #[test]
    fn whitespace_is_descendant_combinator() {
        let parsed = parse(".title  a").ok();
        assert_eq!(
            parsed,
            Some(Selector::Descendant {
                ancestor: Box::new(Selector::class("title")),
                target: Box::new(Selector::tag("a")),
            })
        );
    }

    #[test]
    fn universal_prefix_is_ignored() {
        assert_eq!(parse("*[role=main]").ok(), Some(Selector::attr("role", Some("main"))));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "   ", ".", "#", "div[", "div[x='y]", "a > b", "a + b", "div..x", "p!"] {
            assert!(parse(bad).is_err(), "expected {bad:?} to be rejected");
        }
    }
}
