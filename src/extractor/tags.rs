//! Tag catalogs used by the locator, noise filter and text assembly.
//!
//! Arrays for iteration and `HashSet`s for O(1) lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Elements that are non-article by definition. A text block under any of
/// these never reaches the body, whatever the site profile says.
pub static STRUCTURAL_DENYLIST: [&str; 5] = ["aside", "figure", "header", "footer", "nav"];

/// Blocks whose text is assembled into the body.
pub static TEXT_BLOCK_TAGS: [&str; 7] = ["p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Containers removed when they end up with no text and no media.
pub static EMPTY_PRUNABLE_TAGS: [&str; 8] = ["p", "div", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Embedded media that keep an otherwise empty container alive.
pub static MEDIA_MARKER_TAGS: [&str; 5] = ["img", "video", "picture", "audio", "source"];

/// Containers considered by the paragraph-density fallback.
pub static DENSITY_CANDIDATE_TAGS: [&str; 4] = ["article", "main", "section", "div"];

/// `TEXT_BLOCK_TAGS` as a `HashSet`
pub static TEXT_BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TEXT_BLOCK_TAGS.into_iter().collect());

/// Whether `tag` is a text-bearing block.
#[inline]
#[must_use]
pub fn is_text_block(tag: &str) -> bool {
    TEXT_BLOCK_TAG_SET.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_blocks_are_paragraphs_and_headings() {
        assert!(is_text_block("p"));
        assert!(is_text_block("h1"));
        assert!(is_text_block("h6"));
        assert!(!is_text_block("div"));
        assert!(!is_text_block("li"));
    }

    #[test]
    fn structural_denylist_is_fixed() {
        assert_eq!(STRUCTURAL_DENYLIST, ["aside", "figure", "header", "footer", "nav"]);
    }
}
