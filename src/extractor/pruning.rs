//! Noise Filter
//!
//! Works on a private copy of the located body, never on the snapshot.
//! The passes run in a fixed order:
//!
//! 1. subtrees matching the profile's unwanted selectors
//! 2. strip-listed tags (script, style, iframe, ...)
//! 3. text blocks under a structurally non-article element
//!    ([`STRUCTURAL_DENYLIST`])
//! 4. text blocks carrying a boilerplate class, on themselves or an ancestor
//! 5. empty paragraphs, headings and divs without media, innermost first
//!
//! Running the filter on its own output changes nothing.

use dom_query::{Document, Selection};

use super::tags::{is_text_block, EMPTY_PRUNABLE_TAGS, MEDIA_MARKER_TAGS, STRUCTURAL_DENYLIST};
use crate::dom;
use crate::profile::SiteProfile;
use crate::selector::{self, utils};

/// Filtered copy of a body subtree.
pub struct FilteredBody {
    document: Document,
    root_tag: String,
}

impl FilteredBody {
    /// Root of the filtered body.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        dom::cloned_root(&self.document, &self.root_tag)
    }

    /// Serialized filtered body.
    #[must_use]
    pub fn html(&self) -> String {
        dom::outer_html(&self.root()).to_string()
    }

    /// Text blocks left after filtering, in document order.
    #[must_use]
    pub fn text_blocks(&self) -> Vec<Selection<'_>> {
        text_blocks(&self.root())
    }
}

impl std::fmt::Debug for FilteredBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredBody")
            .field("root_tag", &self.root_tag)
            .field("blocks", &self.text_blocks().len())
            .finish()
    }
}

/// Removal counts per pass, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Subtrees matching unwanted selectors.
    pub unwanted: usize,
    /// Strip-listed elements.
    pub stripped: usize,
    /// Blocks under a denylisted structural ancestor.
    pub structural: usize,
    /// Blocks carrying a boilerplate class.
    pub boilerplate: usize,
    /// Empty leaves.
    pub empty: usize,
}

impl PruneStats {
    /// Total elements removed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.unwanted + self.stripped + self.structural + self.boilerplate + self.empty
    }
}

/// Filter a located body subtree against a profile.
#[must_use]
pub fn filter(body: &Selection, profile: &SiteProfile) -> FilteredBody {
    filter_with_stats(body, profile).0
}

/// [`filter`], also reporting what each pass removed.
#[must_use]
pub fn filter_with_stats(body: &Selection, profile: &SiteProfile) -> (FilteredBody, PruneStats) {
    let root_tag = dom::tag_name(body).unwrap_or_default();
    let filtered = FilteredBody {
        document: dom::clone_element(body),
        root_tag,
    };

    let mut stats = PruneStats::default();
    {
        let root = filtered.root();
        stats.unwanted = remove_unwanted(&root, profile);
        stats.stripped = remove_stripped_tags(&root, profile);
        stats.structural = remove_structural_blocks(&root);
        stats.boilerplate = remove_boilerplate_blocks(&root, &profile.boilerplate_classes);
        stats.empty = remove_empty_leaves(&root);
    }

    tracing::debug!(
        profile = %profile.name,
        unwanted = stats.unwanted,
        stripped = stats.stripped,
        structural = stats.structural,
        boilerplate = stats.boilerplate,
        empty = stats.empty,
        "noise filter applied"
    );
    (filtered, stats)
}

/// Text-bearing blocks in document order, `root` included when it is one.
#[must_use]
pub fn text_blocks<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut blocks = Vec::new();
    if is_block(root) {
        blocks.push(root.clone());
    }
    blocks.extend(descendant_blocks(root));
    blocks
}

/// Text-bearing blocks strictly below `root`; the passes never remove the root.
fn descendant_blocks<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    dom::descendant_elements(root).into_iter().filter(is_block).collect()
}

fn is_block(el: &Selection) -> bool {
    dom::tag_name(el).is_some_and(|t| is_text_block(&t))
}

fn remove_unwanted(root: &Selection, profile: &SiteProfile) -> usize {
    let mut removed = 0;
    for selector in &profile.unwanted_selectors {
        // Re-query per selector: earlier removals may have taken matches with them.
        for node in selector::query_all(root, selector).into_iter().rev() {
            dom::remove(&node);
            removed += 1;
        }
    }
    removed
}

fn remove_stripped_tags(root: &Selection, profile: &SiteProfile) -> usize {
    let doomed: Vec<Selection> = dom::descendant_elements(root)
        .into_iter()
        .filter(|el| dom::tag_name(el).is_some_and(|t| profile.strips(&t)))
        .collect();
    remove_all(doomed)
}

fn remove_structural_blocks(root: &Selection) -> usize {
    let doomed: Vec<Selection> = descendant_blocks(root)
        .into_iter()
        .filter(|block| utils::nearest_ancestor_tag(block, &STRUCTURAL_DENYLIST).is_some())
        .collect();
    remove_all(doomed)
}

fn remove_boilerplate_blocks(root: &Selection, classes: &[String]) -> usize {
    if classes.is_empty() {
        return 0;
    }
    let doomed: Vec<Selection> = descendant_blocks(root)
        .into_iter()
        .filter(|block| {
            utils::has_any_class(block, classes)
                || utils::ancestors(block).iter().any(|a| utils::has_any_class(a, classes))
        })
        .collect();
    remove_all(doomed)
}

fn remove_empty_leaves(root: &Selection) -> usize {
    let candidates: Vec<Selection> = dom::descendant_elements(root)
        .into_iter()
        .filter(|el| dom::is_one_of(el, &EMPTY_PRUNABLE_TAGS))
        .collect();

    let mut removed = 0;
    // Innermost first, so a wrapper emptied by this pass goes too.
    for el in candidates.into_iter().rev() {
        if !dom::has_text(&el) && !has_media(&el) {
            dom::remove(&el);
            removed += 1;
        }
    }
    removed
}

fn has_media(sel: &Selection) -> bool {
    dom::descendant_elements(sel)
        .iter()
        .any(|el| dom::is_one_of(el, &MEDIA_MARKER_TAGS))
}

fn remove_all(doomed: Vec<Selection>) -> usize {
    let count = doomed.len();
    for node in doomed.into_iter().rev() {
        dom::remove(&node);
    }
    count
}
