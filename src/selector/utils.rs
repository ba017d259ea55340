//! Utility functions for selector matching and DOM traversal.

use crate::dom;
use dom_query::Selection;

/// All element ancestors of a node, nearest first.
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut out = Vec::new();
    let mut current = dom::parent(sel);

    while current.exists() {
        if dom::tag_name(&current).is_some() {
            out.push(current.clone());
        }
        current = dom::parent(&current);
    }

    out
}

/// Nearest ancestor whose tag is one of `tags`.
///
/// # Example
///
/// ```rust
/// use rs_news_extract::selector::utils;
/// use rs_news_extract::dom;
///
/// let doc = dom::parse(r#"
///     <article>
///         <aside>
///             <div><p id="target">text</p></div>
///         </aside>
///     </article>
/// "#);
/// let p = doc.select("#target");
///
/// let found = utils::nearest_ancestor_tag(&p, &["aside", "nav"]);
/// assert_eq!(found.as_deref(), Some("aside"));
/// ```
#[must_use]
pub fn nearest_ancestor_tag(sel: &Selection, tags: &[&str]) -> Option<String> {
    let mut current = dom::parent(sel);

    while current.exists() {
        if let Some(tag) = dom::tag_name(&current) {
            if tags.contains(&tag.as_str()) {
                return Some(tag);
            }
        }
        current = dom::parent(&current);
    }

    None
}

/// Whether the element's class tokens intersect `classes`.
#[must_use]
pub fn has_any_class(sel: &Selection, classes: &[String]) -> bool {
    if classes.is_empty() {
        return false;
    }
    dom::class_tokens(sel).iter().any(|token| classes.contains(token))
}
