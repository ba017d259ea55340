//! Renderer boundary
//!
//! Acquiring rendered HTML (driving a browser, waiting for load, scrolling,
//! dismissing overlays) is not part of the extraction engine. The engine
//! talks to that machinery through the [`Renderer`] and [`RenderSession`]
//! traits and receives either HTML or a typed [`RenderError`].
//!
//! One page load owns one session. [`SessionGuard`] makes sure the session
//! is released exactly once, whichever way the caller leaves.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use thiserror::Error;

use crate::result::Outcome;
use crate::selector::Selector;

pub mod replay;

pub use replay::{ReplayPage, ReplayRenderer};

/// Desktop Chrome signature sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Options for opening a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Run the browser without a visible window.
    ///
    /// Default: `true`
    pub headless: bool,

    /// Client signature declared to the server.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            headless: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Failure reported by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The page could not be loaded at all.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// Initial content or a scroll step did not complete in time.
    #[error("timed out waiting for the page")]
    Timeout,
}

impl From<RenderError> for Outcome {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Navigation(reason) => Self::NavigationFailed(reason),
            RenderError::Timeout => Self::Timeout,
        }
    }
}

/// Result of the best-effort overlay dismissal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BypassAttempt {
    /// No overlay selectors were configured.
    #[default]
    NotAttempted,
    /// Overlays were present but could not be dismissed.
    Failed,
    /// Every overlay that was found got dismissed.
    Succeeded,
}

impl BypassAttempt {
    /// Whether the paywall bypass went through.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl From<bool> for BypassAttempt {
    fn from(success: bool) -> Self {
        if success {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// Opens page sessions.
pub trait Renderer {
    /// Session type handed out per page load.
    type Session: RenderSession;

    /// Navigate to `url`.
    ///
    /// # Errors
    ///
    /// [`RenderError::Navigation`] when the page cannot be loaded,
    /// [`RenderError::Timeout`] when navigation does not finish in time.
    fn render(&self, url: &str, options: &RenderOptions) -> Result<Self::Session, RenderError>;
}

/// One loaded page.
pub trait RenderSession {
    /// Block until the page shows its initial content or `timeout` passes.
    ///
    /// # Errors
    ///
    /// [`RenderError::Timeout`] when the content never appeared.
    fn await_initial_content(&mut self, timeout: Duration) -> Result<(), RenderError>;

    /// Try to close overlays (consent prompts, subscription modals).
    fn dismiss_overlays(&mut self, selectors: &[Selector]) -> BypassAttempt;

    /// Scroll to the bottom and report the resulting page height in pixels.
    ///
    /// # Errors
    ///
    /// [`RenderError::Timeout`] when the page did not settle.
    fn scroll_to_bottom_and_measure(&mut self) -> Result<u64, RenderError>;

    /// Serialized DOM as currently rendered.
    ///
    /// # Errors
    ///
    /// Any renderer failure while reading the page.
    fn current_html(&mut self) -> Result<String, RenderError>;

    /// Tear down the session's resources.
    fn release(&mut self);
}

/// Scoped ownership of a [`RenderSession`].
///
/// The session is released by [`SessionGuard::finish`] or, failing that,
/// when the guard is dropped. Never both.
pub struct SessionGuard<S: RenderSession> {
    session: S,
    released: bool,
}

impl<S: RenderSession> SessionGuard<S> {
    /// Take ownership of a freshly opened session.
    pub fn new(session: S) -> Self {
        Self {
            session,
            released: false,
        }
    }

    /// Release the session now.
    pub fn finish(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.session.release();
        }
    }
}

impl<S: RenderSession> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: RenderSession> DerefMut for SessionGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: RenderSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.release_once();
    }
}
