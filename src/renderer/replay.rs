//! Replay renderer: serves recorded pages instead of driving a browser.
//!
//! Replays captured pages through the whole scrape path, which is how the
//! tests exercise navigation failures, timeouts and infinite-scroll pages.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{BypassAttempt, RenderError, RenderOptions, RenderSession, Renderer};
use crate::selector::Selector;

/// A recorded page.
#[derive(Debug, Clone, Default)]
pub struct ReplayPage {
    html: String,
    heights: Vec<u64>,
    overlay_dismissible: bool,
    never_ready: bool,
}

impl ReplayPage {
    /// Page that renders `html` and never grows when scrolled.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            overlay_dismissible: true,
            ..Self::default()
        }
    }

    /// Heights reported by successive scroll steps. Scrolling past the end
    /// of the script reports a timeout.
    #[must_use]
    pub fn with_heights(mut self, heights: &[u64]) -> Self {
        self.heights = heights.to_vec();
        self
    }

    /// Whether overlays can be closed.
    #[must_use]
    pub fn with_dismissible_overlay(mut self, dismissible: bool) -> Self {
        self.overlay_dismissible = dismissible;
        self
    }

    /// Initial content never shows up.
    #[must_use]
    pub fn never_ready(mut self) -> Self {
        self.never_ready = true;
        self
    }
}

#[derive(Debug, Clone)]
enum Recording {
    Page(ReplayPage),
    NavigationFailure(String),
}

/// Renderer backed by an in-memory map of URL to recorded page.
#[derive(Debug, Clone, Default)]
pub struct ReplayRenderer {
    recordings: HashMap<String, Recording>,
    opened: Arc<AtomicUsize>,
    captured: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl ReplayRenderer {
    /// Empty renderer; every URL fails navigation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page for `url`.
    #[must_use]
    pub fn with_page(mut self, url: &str, page: ReplayPage) -> Self {
        self.recordings.insert(url.to_string(), Recording::Page(page));
        self
    }

    /// Make navigation to `url` fail with `reason`.
    #[must_use]
    pub fn with_navigation_failure(mut self, url: &str, reason: &str) -> Self {
        self.recordings
            .insert(url.to_string(), Recording::NavigationFailure(reason.to_string()));
        self
    }

    /// Sessions opened so far.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// HTML captures taken so far, across sessions.
    #[must_use]
    pub fn captures(&self) -> usize {
        self.captured.load(Ordering::SeqCst)
    }

    /// Sessions released so far.
    #[must_use]
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl Renderer for ReplayRenderer {
    type Session = ReplaySession;

    fn render(&self, url: &str, options: &RenderOptions) -> Result<ReplaySession, RenderError> {
        tracing::debug!(url, headless = options.headless, "replaying page");
        match self.recordings.get(url) {
            Some(Recording::Page(page)) => {
                self.opened.fetch_add(1, Ordering::SeqCst);
                Ok(ReplaySession {
                    page: page.clone(),
                    cursor: 0,
                    captured: Arc::clone(&self.captured),
                    released: Arc::clone(&self.released),
                })
            }
            Some(Recording::NavigationFailure(reason)) => Err(RenderError::Navigation(reason.clone())),
            None => Err(RenderError::Navigation(format!("no recorded page for {url}"))),
        }
    }
}

/// Session over one recorded page.
#[derive(Debug)]
pub struct ReplaySession {
    page: ReplayPage,
    cursor: usize,
    captured: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl RenderSession for ReplaySession {
    fn await_initial_content(&mut self, _timeout: Duration) -> Result<(), RenderError> {
        if self.page.never_ready {
            Err(RenderError::Timeout)
        } else {
            Ok(())
        }
    }

    fn dismiss_overlays(&mut self, selectors: &[Selector]) -> BypassAttempt {
        if selectors.is_empty() {
            return BypassAttempt::NotAttempted;
        }
        BypassAttempt::from(self.page.overlay_dismissible)
    }

    fn scroll_to_bottom_and_measure(&mut self) -> Result<u64, RenderError> {
        if self.page.heights.is_empty() {
            return Ok(0);
        }
        let height = self.page.heights.get(self.cursor).copied().ok_or(RenderError::Timeout)?;
        self.cursor += 1;
        Ok(height)
    }

    fn current_html(&mut self) -> Result<String, RenderError> {
        self.captured.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.html.clone())
    }

    fn release(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
