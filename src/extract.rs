//! Extraction pipeline.
//!
//! `(Snapshot, SiteProfile) -> ExtractionResult`, with no I/O. Article
//! profiles go through locate, filter, assemble, paywall gate and
//! normalize; stream profiles classify feed items instead.

use crate::extractor::{assemble, locator, pruning};
use crate::metadata::{self, Metadata};
use crate::normalize;
use crate::options::Options;
use crate::paywall;
use crate::profile::{ProfileKind, SiteProfile, StreamProfile};
use crate::renderer::BypassAttempt;
use crate::result::{ExtractionResult, Outcome, TITLE_NOT_FOUND};
use crate::snapshot::Snapshot;
use crate::stream;

/// Heading that introduces live updates in the rendered text.
const LIVE_UPDATES_HEADING: &str = "Live Updates:";

/// Run the pipeline for one snapshot.
pub(crate) fn extract_snapshot(
    snapshot: &Snapshot,
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> ExtractionResult {
    let metadata = metadata::extract_metadata(snapshot, &profile.metadata);

    match &profile.kind {
        ProfileKind::Article => extract_article(snapshot, profile, metadata, bypass, options),
        ProfileKind::Stream(stream) => extract_stream(snapshot, profile, stream, metadata),
    }
}

fn extract_article(
    snapshot: &Snapshot,
    profile: &SiteProfile,
    metadata: Metadata,
    bypass: BypassAttempt,
    options: &Options,
) -> ExtractionResult {
    let Some(located) = locator::locate(snapshot, &profile.body_selectors, options.density_min_chars) else {
        tracing::warn!(profile = %profile.name, "could not find the main content on the page");
        return failed_with(metadata, Outcome::ContentNotFound);
    };
    tracing::debug!(profile = %profile.name, strategy = %located.strategy, tag = %located.tag(), "body located");

    let filtered = pruning::filter(&located.root, profile);
    let blocks = assemble::collect_blocks(&filtered, profile);
    let body = assemble::join_blocks(&blocks);

    if let Some(signal) = paywall::detect(&located.root, &body, profile, bypass, options) {
        tracing::warn!(profile = %profile.name, %signal, ?bypass, "article content might be behind a paywall");
        return failed_with(metadata, Outcome::PaywallDetected);
    }

    let live_updates = match &profile.live_feed {
        Some(feed) if options.include_live_updates => stream::live_updates(snapshot, feed),
        _ => Vec::new(),
    };

    let text = compose_text(&metadata, &blocks, &live_updates, profile.has_byline());
    tracing::info!(
        profile = %profile.name,
        blocks = blocks.len(),
        updates = live_updates.len(),
        chars = text.chars().count(),
        "article content successfully extracted"
    );

    ExtractionResult {
        title: metadata.title,
        author: metadata.author,
        date: metadata.date,
        body,
        live_updates,
        text,
        status: Outcome::Success,
    }
}

fn extract_stream(
    snapshot: &Snapshot,
    profile: &SiteProfile,
    stream_profile: &StreamProfile,
    metadata: Metadata,
) -> ExtractionResult {
    let entries: Vec<String> = stream::collect_entries(snapshot, stream_profile, &profile.unwanted_selectors)
        .iter()
        .map(ToString::to_string)
        .collect();

    if entries.is_empty() {
        tracing::warn!(profile = %profile.name, "no feed items found on the page");
        return failed_with(metadata, Outcome::ContentNotFound);
    }

    let body = assemble::join_blocks(&entries);
    let text = normalize::normalize(&body);
    tracing::info!(profile = %profile.name, entries = entries.len(), "stream content successfully extracted");

    ExtractionResult {
        title: metadata.title,
        author: metadata.author,
        date: metadata.date,
        body,
        live_updates: entries,
        text,
        status: Outcome::Success,
    }
}

/// Normalized full text: title, optional byline, body, live updates.
///
/// The title is left out when it was not found or when the body already
/// opens with it.
fn compose_text(metadata: &Metadata, blocks: &[String], live_updates: &[String], byline: bool) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(4);

    let title_in_body = blocks.first().is_some_and(|first| *first == metadata.title);
    if metadata.title != TITLE_NOT_FOUND && !title_in_body {
        fragments.push(metadata.title.clone());
    }
    if byline {
        fragments.push(format!("By {}\n{}", metadata.author, metadata.date));
    }
    fragments.push(assemble::join_blocks(blocks));
    if !live_updates.is_empty() {
        fragments.push(format!("{LIVE_UPDATES_HEADING}\n{}", live_updates.join("\n")));
    }

    normalize::normalize_fragments(&fragments)
}

fn failed_with(metadata: Metadata, status: Outcome) -> ExtractionResult {
    ExtractionResult {
        title: metadata.title,
        author: metadata.author,
        date: metadata.date,
        ..ExtractionResult::failed(status)
    }
}
