//! Scrape driver: one URL, one renderer session, one pipeline run.
//!
//! Renderer failures come back as [`Outcome::NavigationFailed`] or
//! [`Outcome::Timeout`]; nothing here retries.

use crate::extract::extract_snapshot;
use crate::options::Options;
use crate::profile::{ProfileRegistry, SiteProfile};
use crate::renderer::{BypassAttempt, RenderError, RenderSession, Renderer, SessionGuard};
use crate::result::{ExtractionResult, Outcome};
use crate::snapshot::Snapshot;
use crate::stream::Stabilizer;

/// Scrape `url` with the profile the registry assigns to it.
#[must_use]
pub fn scrape<R: Renderer>(url: &str, renderer: &R, registry: &ProfileRegistry, options: &Options) -> ExtractionResult {
    let profile = registry.lookup(url);
    tracing::debug!(url, profile = %profile.name, "profile selected");
    scrape_with_profile(url, renderer, profile, options)
}

/// Scrape `url` with an explicit profile.
#[must_use]
pub fn scrape_with_profile<R: Renderer>(
    url: &str,
    renderer: &R,
    profile: &SiteProfile,
    options: &Options,
) -> ExtractionResult {
    match capture(url, renderer, profile, options) {
        Ok((html, bypass)) => {
            let snapshot = Snapshot::parse(&html);
            extract_snapshot(&snapshot, profile, bypass, options)
        }
        Err(err) => {
            tracing::warn!(url, profile = %profile.name, error = %err, "page could not be rendered");
            ExtractionResult::failed(Outcome::from(err))
        }
    }
}

/// Drive one session to a final HTML capture. The session is released on
/// every path out of here.
fn capture<R: Renderer>(
    url: &str,
    renderer: &R,
    profile: &SiteProfile,
    options: &Options,
) -> Result<(String, BypassAttempt), RenderError> {
    tracing::info!(url, "navigating");
    let mut session = SessionGuard::new(renderer.render(url, &options.render)?);

    session.await_initial_content(options.initial_content_timeout)?;

    let bypass = if profile.overlay_selectors.is_empty() {
        BypassAttempt::NotAttempted
    } else {
        let attempt = session.dismiss_overlays(&profile.overlay_selectors);
        tracing::debug!(url, ?attempt, "overlay dismissal");
        attempt
    };

    if profile.is_article() {
        session.scroll_to_bottom_and_measure()?;
    } else {
        Stabilizer::new().settle(&mut *session)?;
    }

    let html = session.current_html()?;
    session.finish();
    Ok((html, bypass))
}
