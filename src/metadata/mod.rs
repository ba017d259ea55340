//! Metadata Extractor
//!
//! Resolves title, author and date against the whole snapshot, not the
//! filtered body: bylines and datelines usually sit outside the body
//! container. Each field has an ordered selector list; every selector's
//! matches are tried in document order and the first non-empty text wins.
//!
//! Elements without text fall back to their `content` attribute (for
//! `<meta>`) or `datetime` attribute (for `<time>`). Dates are carried as
//! printed and never parsed.

use dom_query::Selection;

use crate::dom;
use crate::normalize::collapse_whitespace;
use crate::profile::MetadataSelectors;
use crate::result::{AUTHOR_NOT_FOUND, DATE_NOT_FOUND, TITLE_NOT_FOUND};
use crate::selector::Selector;
use crate::snapshot::Snapshot;

/// Attributes consulted when a matched element has no text.
const VALUE_ATTRIBUTES: [&str; 2] = ["content", "datetime"];

/// Resolved metadata fields, sentinels included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Article title or [`TITLE_NOT_FOUND`].
    pub title: String,
    /// Byline or [`AUTHOR_NOT_FOUND`].
    pub author: String,
    /// Publication date or [`DATE_NOT_FOUND`].
    pub date: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: TITLE_NOT_FOUND.to_string(),
            author: AUTHOR_NOT_FOUND.to_string(),
            date: DATE_NOT_FOUND.to_string(),
        }
    }
}

/// Resolve every metadata field of a snapshot.
#[must_use]
pub fn extract_metadata(snapshot: &Snapshot, selectors: &MetadataSelectors) -> Metadata {
    let metadata = Metadata {
        title: resolve_title(snapshot, &selectors.title),
        author: resolve_author(snapshot, &selectors.author),
        date: resolve_date(snapshot, &selectors.date),
    };
    tracing::debug!(
        title = %metadata.title,
        author = %metadata.author,
        date = %metadata.date,
        "metadata resolved"
    );
    metadata
}

/// Title, or [`TITLE_NOT_FOUND`].
#[must_use]
pub fn resolve_title(snapshot: &Snapshot, selectors: &[Selector]) -> String {
    first_text(snapshot, selectors).unwrap_or_else(|| TITLE_NOT_FOUND.to_string())
}

/// Author, or [`AUTHOR_NOT_FOUND`].
#[must_use]
pub fn resolve_author(snapshot: &Snapshot, selectors: &[Selector]) -> String {
    first_text(snapshot, selectors).unwrap_or_else(|| AUTHOR_NOT_FOUND.to_string())
}

/// Date as printed on the page, or [`DATE_NOT_FOUND`].
#[must_use]
pub fn resolve_date(snapshot: &Snapshot, selectors: &[Selector]) -> String {
    first_text(snapshot, selectors).unwrap_or_else(|| DATE_NOT_FOUND.to_string())
}

/// First non-empty value for an ordered selector list.
#[must_use]
pub fn first_text(snapshot: &Snapshot, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        snapshot
            .query_all(selector)
            .iter()
            .find_map(element_value)
    })
}

/// Visible text of an element, else its `content`/`datetime` attribute,
/// with whitespace runs collapsed.
fn element_value(sel: &Selection) -> Option<String> {
    let text = collapse_whitespace(&dom::stripped_text(sel));
    if !text.is_empty() {
        return Some(text);
    }

    VALUE_ATTRIBUTES
        .iter()
        .filter_map(|name| dom::get_attribute(sel, name))
        .map(|value| collapse_whitespace(&value))
        .find(|value| !value.is_empty())
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

    const PAGE: &str = r#"
        <html>
        <head>
            <title>Page title</title>
            <meta name="author" content="Meta Author">
        </head>
        <body>
            <header><span class="byline"> </span></header>
            <h1>Headline</h1>
            <div class="byline">
                <a href="/a">Jane   Doe</a>
            </div>
            <time datetime="2024-08-17T10:00:00Z"></time>
            <article><p>Body</p></article>
        </body>
        </html>
    "#;

    #[test]
    fn test_first_non_empty_match_wins() {
        let snap = Snapshot::parse(PAGE);

        // The first `.byline` is blank, so the second one is used.
        assert_eq!(resolve_author(&snap, &[sel(".byline")]), "Jane Doe");
    }

    #[test]
    fn test_selector_order_is_respected() {
        let snap = Snapshot::parse(PAGE);

        let author = resolve_author(&snap, &[sel("meta[name=author]"), sel(".byline")]);
        assert_eq!(author, "Meta Author");
    }

    #[test]
    fn test_datetime_attribute_fallback() {
        let snap = Snapshot::parse(PAGE);
        assert_eq!(resolve_date(&snap, &[sel("time")]), "2024-08-17T10:00:00Z");
    }

    #[test]
    fn test_sentinels() {
        let snap = Snapshot::parse(PAGE);
        let metadata = extract_metadata(
            &snap,
            &MetadataSelectors {
                title: vec![sel(".nope")],
                author: vec![],
                date: vec![sel(".missing")],
            },
        );

        assert_eq!(metadata, Metadata::default());
    }

    #[test]
    fn test_default_title_is_first_h1() {
        let snap = Snapshot::parse(PAGE);
        assert_eq!(resolve_title(&snap, &MetadataSelectors::default().title), "Headline");
    }

    #[test]
    fn test_metadata_outside_body_container() {
        let snap = Snapshot::parse(PAGE);
        let article = snap.query(&Selector::tag("article"));

        assert!(article.is_some_and(|a| dom::stripped_text(&a) == "Body"));
        assert_eq!(resolve_author(&snap, &[sel("div.byline a")]), "Jane Doe");
    }
}
