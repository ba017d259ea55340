//! Configuration options for extraction and scraping.
//!
//! Site-specific behavior lives in [`crate::SiteProfile`]; `Options` holds the
//! knobs that apply to every site.

use std::time::Duration;

use crate::renderer::RenderOptions;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_news_extract::Options;
///
/// let options = Options {
///     include_live_updates: false,
///     textual_gate_max_chars: Some(1_500),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Collect a profile's live-update feed.
    ///
    /// Default: `true`
    pub include_live_updates: bool,

    /// Only apply the subscribe/sign-up phrasing check to bodies shorter
    /// than this many characters.
    ///
    /// `None` applies it to bodies of any length.
    ///
    /// Default: `None`
    pub textual_gate_max_chars: Option<usize>,

    /// Minimum visible characters for a paragraph-density fallback candidate.
    ///
    /// Default: `1`
    pub density_min_chars: usize,

    /// How long the renderer may wait for the page's initial content.
    ///
    /// Default: 10 seconds
    pub initial_content_timeout: Duration,

    /// Options forwarded to the renderer when a page is opened.
    pub render: RenderOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_live_updates: true,
            textual_gate_max_chars: None,
            density_min_chars: 1,
            initial_content_timeout: Duration::from_secs(10),
            render: RenderOptions::default(),
        }
    }
}
