//! # rs-news-extract
//!
//! Profile-driven article extraction from rendered news pages.
//!
//! Every publisher marks up its articles differently, surrounds them with
//! ads, navigation and related-content widgets, and sometimes hides them
//! behind a paywall. This crate turns the rendered HTML of such a page into
//! a clean [`ExtractionResult`] (title, author, date, body and live updates)
//! driven by a per-site [`SiteProfile`] instead of per-site code.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_news_extract::{extract, Outcome, Selector, SiteProfile};
//!
//! let html = r#"<html><body>
//!     <article><h1>T</h1><p>A</p><aside><p>ad</p></aside></article>
//! </body></html>"#;
//!
//! let profile = SiteProfile {
//!     body_selectors: vec![Selector::tag("article")],
//!     ..SiteProfile::default()
//! };
//!
//! let result = extract(html, &profile);
//! assert_eq!(result.status, Outcome::Success);
//! assert_eq!(result.body, "T\n\nA");
//! ```
//!
//! ## Pipeline
//!
//! Rendered HTML → [`Snapshot`] → content locator and metadata → noise
//! filter → paywall gate → normalized text. Feed-style profiles replace the
//! locator and filter with item classification (see [`stream`]).
//!
//! Failures are values: a page that cannot be loaded, has no body, or is
//! paywalled still yields an `ExtractionResult` whose [`Outcome`] says so.
//!
//! ## Rendering
//!
//! Fetching and rendering pages sits behind the [`renderer::Renderer`]
//! trait. [`scrape`] drives one session per URL and releases it on every
//! exit path.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector infrastructure: tagged selectors, parsing and query functions.
pub mod selector;

/// Immutable, queryable page snapshot.
pub mod snapshot;

/// Site profiles and the profile registry.
pub mod profile;

/// Body location, noise filtering and text assembly.
pub mod extractor;

/// Title, author and date resolution.
pub mod metadata;

/// Paywall gate.
pub mod paywall;

/// Live-update and feed collection, scroll stabilization.
pub mod stream;

/// Whitespace normalization of assembled text.
pub mod normalize;

/// Renderer boundary and the replay renderer.
pub mod renderer;

/// Scrape driver over a renderer.
pub mod scrape;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use profile::{ProfileKind, ProfileRegistry, SiteProfile};
pub use renderer::{BypassAttempt, RenderOptions};
pub use result::{ExtractionResult, Outcome, AUTHOR_NOT_FOUND, DATE_NOT_FOUND, TITLE_NOT_FOUND};
pub use scrape::{scrape, scrape_with_profile};
pub use selector::Selector;
pub use snapshot::Snapshot;

/// Extract an article from rendered HTML with default options.
///
/// No overlay bypass is assumed, so the subscribe/sign-up phrasing check is
/// active for profiles that enable it.
#[must_use]
pub fn extract(html: &str, profile: &SiteProfile) -> ExtractionResult {
    extract_with_options(html, profile, BypassAttempt::NotAttempted, &Options::default())
}

/// Extract with an explicit bypass outcome and options.
///
/// # Example
///
/// ```rust
/// use rs_news_extract::{extract_with_options, BypassAttempt, Options, Outcome, SiteProfile};
///
/// let html = "<article><p>Please subscribe to continue reading</p></article>";
/// let profile = SiteProfile::default();
///
/// let blocked = extract_with_options(html, &profile, BypassAttempt::Failed, &Options::default());
/// assert_eq!(blocked.status, Outcome::PaywallDetected);
///
/// let bypassed = extract_with_options(html, &profile, BypassAttempt::Succeeded, &Options::default());
/// assert_eq!(bypassed.status, Outcome::Success);
/// ```
#[must_use]
pub fn extract_with_options(
    html: &str,
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> ExtractionResult {
    extract_snapshot(&Snapshot::parse(html), profile, bypass, options)
}

/// Extract from an already-built snapshot.
#[must_use]
pub fn extract_snapshot(
    snapshot: &Snapshot,
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> ExtractionResult {
    extract::extract_snapshot(snapshot, profile, bypass, options)
}

/// Extract from raw bytes, honoring a declared `<meta charset>`.
#[must_use]
pub fn extract_bytes(
    html: &[u8],
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> ExtractionResult {
    extract_snapshot(&Snapshot::parse_bytes(html), profile, bypass, options)
}
