//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by every stage of the
//! extraction pipeline. Stages never reach into `dom_query` for text or
//! attribute access directly; they go through these functions so that
//! whitespace handling and class tokenization stay consistent.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::normalize::collapse_whitespace;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Class attribute split into whitespace-separated tokens.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Whether the class attribute contains `name` as a whole token.
#[must_use]
pub fn has_class_token(sel: &Selection, name: &str) -> bool {
    sel.attr("class")
        .is_some_and(|class| class.split_whitespace().any(|token| token == name))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Whether the first node of the selection is an element with one of `tags`.
#[must_use]
pub fn is_one_of(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text Content ===

/// Get all text content of node and descendants, unmodified.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text of every descendant text node, each trimmed, empties dropped,
/// joined by a single space.
///
/// `<p> Hello <b>big</b>world </p>` yields `"Hello big world"`.
#[must_use]
pub fn stripped_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }
    parts.join(" ")
}

/// Elements that start a new line when rendered.
const LINE_BREAK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "tr", "ul",
];

/// Text under `sel` split into rendered lines.
///
/// Block-level elements and `<br>` break the line; whitespace inside a line
/// collapses to single spaces and blank lines are dropped.
/// `<li><h3>GOAL</h3><p>1 - 0</p></li>` yields `["GOAL", "1 - 0"]`.
#[must_use]
pub fn rendered_lines(sel: &Selection) -> Vec<String> {
    let Some(root) = sel.nodes().first() else {
        return Vec::new();
    };

    let mut lines = vec![String::new()];
    collect_lines(root, &mut lines);
    lines
        .iter()
        .map(|line| collapse_whitespace(line))
        .filter(|line| !line.is_empty())
        .collect()
}

fn collect_lines(node: &NodeRef, lines: &mut Vec<String>) {
    let mut child = node.first_child();
    while let Some(current) = child {
        if current.is_text() {
            if let Some(line) = lines.last_mut() {
                line.push(' ');
                line.push_str(&current.text());
            }
        } else if current.is_element() {
            let name = current.node_name().map(|n| n.to_ascii_lowercase()).unwrap_or_default();
            if !matches!(name.as_str(), "script" | "style" | "noscript" | "template") {
                let breaks = LINE_BREAK_TAGS.contains(&name.as_str());
                if breaks {
                    lines.push(String::new());
                }
                collect_lines(&current, lines);
                if breaks {
                    lines.push(String::new());
                }
            }
        }
        child = current.next_sibling();
    }
}

/// Whether the selection holds any non-whitespace text.
#[must_use]
pub fn has_text(sel: &Selection) -> bool {
    text_content(sel).chars().any(|c| !c.is_whitespace())
}

/// Count of non-whitespace characters under the selection.
#[must_use]
pub fn visible_char_count(sel: &Selection) -> usize {
    text_content(sel).chars().filter(|c| !c.is_whitespace()).count()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Every element strictly below `sel`, in document order.
#[must_use]
pub fn descendant_elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Clone an element with all descendants into a fresh document.
///
/// The element lands under the new document's `<body>`; use
/// [`cloned_root`] to get back at it. Table parts are reparsed inside the
/// table context they need, otherwise the parser drops their start tags.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    let html = outer_html(sel);
    match tag_name(sel).as_deref().and_then(table_context) {
        Some((open, close)) => Document::from(format!("{open}{html}{close}")),
        None => Document::from(html),
    }
}

/// Wrapper markup a table part needs to survive reparsing.
fn table_context(tag: &str) -> Option<(&'static str, &'static str)> {
    match tag {
        "td" | "th" => Some(("<table><tbody><tr>", "</tr></tbody></table>")),
        "tr" => Some(("<table><tbody>", "</tbody></table>")),
        "tbody" | "thead" | "tfoot" | "caption" | "colgroup" => Some(("<table>", "</table>")),
        _ => None,
    }
}

/// The element a [`clone_element`] call copied, inside its new document.
///
/// The copy is the first element under `<body>` carrying the original tag,
/// since any table wrapper precedes it in document order. `<html>` and
/// `<body>` clones merge into the new document's own body, so the body is
/// returned for those.
#[must_use]
pub fn cloned_root<'a>(doc: &'a Document, original_tag: &str) -> Selection<'a> {
    let body = doc.select("body");
    if matches!(original_tag, "html" | "body") {
        return body;
    }
    descendant_elements(&body)
        .into_iter()
        .find(|el| tag_name(el).as_deref() == Some(original_tag))
        .unwrap_or(body)
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
