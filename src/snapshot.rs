//! DOM Snapshot
//!
//! An immutable, queryable tree built once from a rendered-HTML string.
//!
//! The tree itself is `dom_query`'s arena: every node is owned by the
//! document, children are held in order, and parent links are plain ids used
//! for lookup only. `Snapshot` exposes read operations exclusively, so once
//! built the tree cannot change; stages that need to prune work on their own
//! copy (see [`crate::extractor::pruning`]).

use dom_query::{Document, Selection};

use crate::dom;
use crate::selector::{self, Selector};

/// Parsed representation of one rendered page.
pub struct Snapshot {
    document: Document,
}

impl Snapshot {
    /// Parse rendered HTML into a snapshot.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: dom::parse(html),
        }
    }

    /// Parse raw bytes, detecting the declared character encoding first.
    #[must_use]
    pub fn parse_bytes(html: &[u8]) -> Self {
        Self::parse(&crate::encoding::transcode_to_utf8(html))
    }

    /// The `<html>` element; every query on the snapshot starts here.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        self.document.select("html")
    }

    /// First element anywhere in the page matching `selector`.
    #[must_use]
    pub fn query(&self, selector: &Selector) -> Option<Selection<'_>> {
        selector::query(&self.root(), selector)
    }

    /// Every element in the page matching `selector`, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &Selector) -> Vec<Selection<'_>> {
        selector::query_all(&self.root(), selector)
    }

    /// Visible text of the whole page.
    #[must_use]
    pub fn text(&self) -> String {
        dom::stripped_text(&self.root())
    }
}

impl From<&str> for Snapshot {
    fn from(html: &str) -> Self {
        Self::parse(html)
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("elements", &self.document.select("*").length())
            .finish()
    }
}
