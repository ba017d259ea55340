//! Result types for extraction output.
//!
//! An [`ExtractionResult`] is always returned, whatever happened: failures
//! are carried by its [`Outcome`], and lookups that missed carry explicit
//! sentinel strings instead of being absent.

use serde::{Deserialize, Serialize};

/// Title placeholder when no title selector matched.
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// Author placeholder when no author selector matched.
pub const AUTHOR_NOT_FOUND: &str = "Author not found";

/// Date placeholder when no date selector matched.
pub const DATE_NOT_FOUND: &str = "Date not found";

/// Terminal status of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason")]
pub enum Outcome {
    /// Body located, filtered, and not paywalled.
    Success,
    /// No plausible article body in the page.
    ContentNotFound,
    /// A body was found but the paywall gate fired.
    PaywallDetected,
    /// The renderer could not load the page.
    NavigationFailed(String),
    /// Initial content or scroll stabilization never completed.
    Timeout,
}

impl Outcome {
    /// Whether this is [`Outcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether a fresh attempt with a new renderer session might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NavigationFailed(_) | Self::Timeout)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ContentNotFound => write!(f, "could not find the main content on the page"),
            Self::PaywallDetected => write!(f, "the article content might be behind a paywall"),
            Self::NavigationFailed(reason) => write!(f, "navigation failed: {reason}"),
            Self::Timeout => write!(f, "timeout: page failed to load"),
        }
    }
}

/// Structured article record extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Article title, or [`TITLE_NOT_FOUND`].
    pub title: String,

    /// Byline, or [`AUTHOR_NOT_FOUND`].
    pub author: String,

    /// Publication date exactly as printed on the page, or [`DATE_NOT_FOUND`].
    pub date: String,

    /// Body blocks separated by blank lines. Empty unless `status` is `Success`.
    pub body: String,

    /// Live-blog updates or stream entries, in document order.
    pub live_updates: Vec<String>,

    /// Normalized full text: title, byline, body and updates. Empty unless
    /// `status` is `Success`.
    pub text: String,

    /// How the extraction ended.
    pub status: Outcome,
}

impl ExtractionResult {
    /// A result carrying only a failure outcome; every field holds its sentinel.
    #[must_use]
    pub fn failed(status: Outcome) -> Self {
        Self {
            title: TITLE_NOT_FOUND.to_string(),
            author: AUTHOR_NOT_FOUND.to_string(),
            date: DATE_NOT_FOUND.to_string(),
            body: String::new(),
            live_updates: Vec::new(),
            text: String::new(),
            status,
        }
    }

    /// Whether the author lookup found something.
    #[must_use]
    pub fn has_author(&self) -> bool {
        self.author != AUTHOR_NOT_FOUND
    }

    /// Whether the date lookup found something.
    #[must_use]
    pub fn has_date(&self) -> bool {
        self.date != DATE_NOT_FOUND
    }
}
