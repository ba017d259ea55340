//! Selector Infrastructure
//!
//! A [`Selector`] is an explicit, tagged structural query: tag, class,
//! attribute, an AND of those, or a descendant relation. Resolving a selector
//! is a pure read; every lookup in the crate goes through [`query`] and
//! [`query_all`] so selector behavior can be tested without any renderer.
//!
//! Profiles write selectors in a CSS-like string form (see [`parse`]):
//!
//! ```rust
//! use rs_news_extract::selector::Selector;
//!
//! let sel: Selector = "div.article-body".parse()?;
//! assert_eq!(sel.to_string(), "div.article-body");
//! # Ok::<(), rs_news_extract::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::Error;

pub mod parse;
pub mod utils;

/// A structural query against a snapshot or subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selector {
    /// Element with the given tag name (ASCII case-insensitive).
    Tag(String),

    /// Element whose class attribute contains this whole token.
    Class(String),

    /// Element carrying the attribute, optionally with an exact value.
    Attribute {
        /// Attribute name.
        name: String,
        /// Required value; `None` means presence is enough.
        value: Option<String>,
    },

    /// Every clause must match the same element.
    Compound(Vec<Selector>),

    /// `target` matches and some ancestor matches `ancestor`.
    Descendant {
        /// Selector an ancestor must satisfy.
        ancestor: Box<Selector>,
        /// Selector the element itself must satisfy.
        target: Box<Selector>,
    },
}

impl Selector {
    /// Tag selector.
    #[must_use]
    pub fn tag(name: &str) -> Self {
        Self::Tag(name.to_ascii_lowercase())
    }

    /// Class selector.
    #[must_use]
    pub fn class(name: &str) -> Self {
        Self::Class(name.to_string())
    }

    /// `#id` selector, stored as an attribute clause.
    #[must_use]
    pub fn id(value: &str) -> Self {
        Self::Attribute {
            name: "id".to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Attribute presence (`value = None`) or equality selector.
    #[must_use]
    pub fn attr(name: &str, value: Option<&str>) -> Self {
        Self::Attribute {
            name: name.to_ascii_lowercase(),
            value: value.map(str::to_string),
        }
    }

    /// Test a single element against this selector.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        match self {
            Self::Tag(name) => dom::tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(name)),
            Self::Class(name) => dom::has_class_token(sel, name),
            Self::Attribute { name, value } => match value {
                Some(expected) => sel.attr(name).is_some_and(|v| v.as_ref() == expected.as_str()),
                None => dom::has_attribute(sel, name),
            },
            Self::Compound(clauses) => {
                dom::tag_name(sel).is_some() && clauses.iter().all(|c| c.matches(sel))
            }
            Self::Descendant { ancestor, target } => {
                target.matches(sel)
                    && utils::ancestors(sel).iter().any(|a| ancestor.matches(a))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => write!(f, "{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Attribute { name, value } => match value {
                Some(v) if name == "id" && parse::is_plain_ident(v) => write!(f, "#{v}"),
                Some(v) if parse::is_plain_ident(v) => write!(f, "[{name}={v}]"),
                Some(v) if v.contains('\'') => write!(f, "[{name}=\"{v}\"]"),
                Some(v) => write!(f, "[{name}='{v}']"),
                None => write!(f, "[{name}]"),
            },
            Self::Compound(clauses) => {
                // Tags must lead a compound for the string form to re-parse.
                for clause in clauses.iter().filter(|c| matches!(c, Self::Tag(_))) {
                    write!(f, "{clause}")?;
                }
                for clause in clauses.iter().filter(|c| !matches!(c, Self::Tag(_))) {
                    write!(f, "{clause}")?;
                }
                Ok(())
            }
            Self::Descendant { ancestor, target } => write!(f, "{ancestor} {target}"),
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl TryFrom<String> for Selector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse::parse(&value)
    }
}

impl From<Selector> for String {
    fn from(sel: Selector) -> Self {
        sel.to_string()
    }
}

/// Query for the first descendant of `root` matching `selector`.
///
/// Descendants are visited in document order; `root` itself is not tested.
#[must_use]
pub fn query<'a>(root: &Selection<'a>, selector: &Selector) -> Option<Selection<'a>> {
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if selector.matches(&sel) {
            return Some(sel);
        }
    }
    None
}

/// Query for all descendants of `root` matching `selector`, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, selector: &Selector) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if selector.matches(&sel) {
            matches.push(sel);
        }
    }

    matches
}

/// Parse a comma-separated selector list (`".a, .b"`) into its parts.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] for the first part that fails to parse.
pub fn parse_list(input: &str) -> crate::Result<Vec<Selector>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse::parse)
        .collect()
}
