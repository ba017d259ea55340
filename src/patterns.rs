//! Compiled regex patterns shared across the pipeline.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Paywall Detection Patterns
// =============================================================================

/// Subscribe / sign-up / register phrasing in assembled body text.
///
/// Deliberately blunt: "sign up", "signup", "sign-up" and any "register"
/// all count. The detector gates it on the bypass outcome.
pub static PAYWALL_PHRASING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)subscribe|sign.?up|register").expect("PAYWALL_PHRASING regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Runs of horizontal whitespace inside a line.
pub static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\S\r\n]+").expect("INLINE_WHITESPACE regex")
});
