//! Content Locator
//!
//! Picks the single subtree of a snapshot that holds the article body.
//!
//! The profile's body selectors are tried in list order and the first one
//! with any match wins; its first match in document order is the body.
//! Only when none of them matches does the generic cascade run: `article`,
//! `main`, `[role=main]`, then the paragraph-density heuristic in
//! [`super::fallback`].

use std::fmt;

use dom_query::Selection;

use super::fallback;
use crate::dom;
use crate::selector::Selector;
use crate::snapshot::Snapshot;

/// How the body was found.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// The profile selector at this cascade position matched.
    Profile(usize),
    /// A generic container selector matched.
    Generic(Selector),
    /// Picked by paragraph density; carries the winning ratio.
    Density(f64),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(index) => write!(f, "profile selector #{index}"),
            Self::Generic(sel) => write!(f, "generic {sel}"),
            Self::Density(ratio) => write!(f, "paragraph density {ratio:.2}"),
        }
    }
}

/// A located body subtree inside a snapshot.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    /// Root element of the body.
    pub root: Selection<'a>,
    /// Which rule produced it.
    pub strategy: Strategy,
}

impl Located<'_> {
    /// Lowercase tag of the body root.
    #[must_use]
    pub fn tag(&self) -> String {
        dom::tag_name(&self.root).unwrap_or_default()
    }
}

/// Containers tried, in order, when no profile selector matches.
#[must_use]
pub fn generic_selectors() -> [Selector; 3] {
    [
        Selector::tag("article"),
        Selector::tag("main"),
        Selector::attr("role", Some("main")),
    ]
}

/// Locate the article body.
///
/// Returns `None` when nothing plausible exists: the winning profile match
/// has no visible text, or the generic cascade finds no container with text.
#[must_use]
pub fn locate<'a>(snapshot: &'a Snapshot, selectors: &[Selector], min_chars: usize) -> Option<Located<'a>> {
    for (index, selector) in selectors.iter().enumerate() {
        let Some(root) = snapshot.query(selector) else {
            continue;
        };
        tracing::debug!(selector = %selector, index, "body selector matched");
        if !dom::has_text(&root) {
            tracing::debug!(selector = %selector, "matched body has no text");
            return None;
        }
        return Some(Located {
            root,
            strategy: Strategy::Profile(index),
        });
    }

    locate_generic(snapshot, min_chars)
}

/// The generic cascade on its own, ignoring any profile.
#[must_use]
pub fn locate_generic(snapshot: &Snapshot, min_chars: usize) -> Option<Located<'_>> {
    for selector in generic_selectors() {
        if let Some(root) = snapshot.query_all(&selector).into_iter().find(dom::has_text) {
            tracing::debug!(selector = %selector, "generic container matched");
            return Some(Located {
                root,
                strategy: Strategy::Generic(selector),
            });
        }
    }

    let (root, ratio) = fallback::densest_container(&snapshot.root(), min_chars)?;
    tracing::debug!(ratio, tag = ?dom::tag_name(&root), "density fallback picked container");
    Some(Located {
        root,
        strategy: Strategy::Density(ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        match s.parse() {
            Ok(sel) => sel,
            Err(err) => panic!("{err}"),
        }
    }

    #[test]
    fn test_first_listed_selector_wins_over_document_order() {
        let snap = Snapshot::parse(r#"
            <body>
                <div class="secondary"><p>early in the page</p></div>
                <div class="primary"><p>later in the page</p></div>
            </body>
        "#);

        let located = locate(&snap, &[sel(".primary"), sel(".secondary")], 1);
        let Some(located) = located else { panic!("expected a body") };
        assert_eq!(dom::stripped_text(&located.root), "later in the page");
        assert_eq!(located.strategy, Strategy::Profile(0));
    }

    #[test]
    fn test_unmatched_selectors_are_skipped() {
        let snap = Snapshot::parse(r#"<body><div id="story"><p>text</p></div></body>"#);

        let located = locate(&snap, &[sel(".missing"), sel("#story")], 1);
        assert!(located.is_some_and(|l| l.strategy == Strategy::Profile(1)));
    }

    #[test]
    fn test_empty_match_is_content_not_found() {
        let snap = Snapshot::parse(r#"<body><div class="story">  </div><article><p>x</p></article></body>"#);

        assert!(locate(&snap, &[sel(".story")], 1).is_none());
    }

    #[test]
    fn test_generic_cascade_order() {
        let snap = Snapshot::parse(r#"
            <body>
                <div role="main"><p>role</p></div>
                <main><p>main</p></main>
            </body>
        "#);

        let located = locate(&snap, &[], 1);
        let Some(located) = located else { panic!("expected a body") };
        assert_eq!(located.tag(), "main");
        assert_eq!(located.strategy, Strategy::Generic(Selector::tag("main")));
    }

    #[test]
    fn test_generic_skips_empty_article() {
        let snap = Snapshot::parse(r#"<body><article></article><article><p>second</p></article></body>"#);

        let located = locate(&snap, &[], 1);
        assert!(located.is_some_and(|l| dom::stripped_text(&l.root) == "second"));
    }

    #[test]
    fn test_nothing_with_text_is_none() {
        let snap = Snapshot::parse("<body><div> </div></body>");
        assert!(locate(&snap, &[], 1).is_none());
    }
}
