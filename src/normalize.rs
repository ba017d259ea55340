//! Text Normalizer
//!
//! Collapses horizontal whitespace inside each line, trims every line, drops
//! the lines left empty and joins the rest with single newlines.
//! `normalize(normalize(s)) == normalize(s)` for every `s`.

use crate::patterns::INLINE_WHITESPACE;

/// Normalize assembled text.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(|line| INLINE_WHITESPACE.replace_all(line.trim(), " "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse every whitespace run, newlines included, to one space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join fragments with blank lines, then normalize.
#[must_use]
pub fn normalize_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n\n");
    normalize(&joined)
}
