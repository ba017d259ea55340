//! Error types for rs-news-extract.
//!
//! These errors only surface at configuration boundaries (parsing selectors,
//! loading site profiles). Extraction itself never fails with an `Error`:
//! every runtime condition is reported through [`crate::Outcome`].

/// Error type for configuration and profile loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector string could not be parsed.
    #[error("invalid selector {input:?}: {reason}")]
    InvalidSelector {
        /// The offending selector text.
        input: String,
        /// What the parser rejected.
        reason: String,
    },

    /// A boilerplate phrase pattern is not a valid regular expression.
    #[error("invalid phrase pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A profile registry document could not be decoded.
    #[error("profile registry parse failed: {0}")]
    ProfileParse(#[from] serde_json::Error),

    /// Reading a profile registry file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No profile with the requested name exists in the registry.
    #[error("unknown site profile: {0}")]
    UnknownProfile(String),
}

impl Error {
    pub(crate) fn selector(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
