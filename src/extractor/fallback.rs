//! Paragraph-density fallback.
//!
//! When neither the profile nor the generic containers find the body, pick
//! the container whose own paragraphs carry the largest share of its text.
//! A container scores `direct <p> characters / all descendant characters`,
//! counting non-whitespace characters only.

use dom_query::Selection;

use super::tags::DENSITY_CANDIDATE_TAGS;
use crate::dom;

/// Share of `sel`'s visible text that sits in its direct `<p>` children.
///
/// Zero for an element without text.
#[must_use]
pub fn paragraph_density(sel: &Selection) -> f64 {
    let total = dom::visible_char_count(sel);
    if total == 0 {
        return 0.0;
    }

    let paragraph_chars: usize = dom::children(sel)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|child| dom::is_one_of(child, &["p"]))
        .map(|child| dom::visible_char_count(&child))
        .sum();

    paragraph_chars as f64 / total as f64
}

/// Highest-density candidate below `root`, with its ratio.
///
/// Candidates are `article`, `main`, `section` and `div` elements holding at
/// least `min_chars` visible characters. Ties go to the earlier element in
/// document order. Containers without any direct paragraph text never win.
#[must_use]
pub fn densest_container<'a>(root: &Selection<'a>, min_chars: usize) -> Option<(Selection<'a>, f64)> {
    let min_chars = min_chars.max(1);
    let mut best: Option<(Selection<'a>, f64)> = None;

    for candidate in dom::descendant_elements(root) {
        if !dom::is_one_of(&candidate, &DENSITY_CANDIDATE_TAGS) {
            continue;
        }
        if dom::visible_char_count(&candidate) < min_chars {
            continue;
        }

        let ratio = paragraph_density(&candidate);
        if ratio <= 0.0 {
            continue;
        }
        if best.as_ref().is_none_or(|(_, best_ratio)| ratio > *best_ratio) {
            best = Some((candidate, ratio));
        }
    }

    best
}
