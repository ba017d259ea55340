//! Paywall Detector
//!
//! A gate on the assembled result, evaluated after filtering:
//!
//! - structural: a profile paywall indicator matches inside the located body
//!   as it was before filtering;
//! - empty body: nothing survived filtering;
//! - phrasing: subscribe / sign-up / register wording in the body, unless
//!   the renderer dismissed the overlays and the profile honors that.
//!
//! [`Options::textual_gate_max_chars`] restricts the phrasing check to short
//! bodies.

use std::fmt;

use dom_query::Selection;

use crate::options::Options;
use crate::patterns::PAYWALL_PHRASING;
use crate::profile::SiteProfile;
use crate::renderer::BypassAttempt;
use crate::selector::{self, Selector};

/// Why the detector fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaywallSignal {
    /// A paywall marker element sits inside the body container.
    Indicator(Selector),
    /// Filtering left no text at all.
    EmptyBody,
    /// The body asks the reader to subscribe, sign up or register.
    Phrasing(String),
}

impl fmt::Display for PaywallSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indicator(sel) => write!(f, "paywall indicator {sel} present"),
            Self::EmptyBody => write!(f, "empty body"),
            Self::Phrasing(word) => write!(f, "paywall phrasing {word:?}"),
        }
    }
}

/// Run every check; `None` means the article passes.
///
/// `located` is the body container in the snapshot, before filtering.
#[must_use]
pub fn detect(
    located: &Selection,
    body: &str,
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> Option<PaywallSignal> {
    structural_signal(located, &profile.paywall_indicators)
        .or_else(|| textual_signal(body, profile, bypass, options))
}

/// First paywall indicator matching inside `located`.
#[must_use]
pub fn structural_signal(located: &Selection, indicators: &[Selector]) -> Option<PaywallSignal> {
    indicators
        .iter()
        .find(|indicator| selector::query(located, indicator).is_some())
        .map(|indicator| PaywallSignal::Indicator(indicator.clone()))
}

/// Empty-body and phrasing checks on the assembled body.
#[must_use]
pub fn textual_signal(
    body: &str,
    profile: &SiteProfile,
    bypass: BypassAttempt,
    options: &Options,
) -> Option<PaywallSignal> {
    if body.trim().is_empty() {
        return Some(PaywallSignal::EmptyBody);
    }

    if !profile.paywall_text_check {
        return None;
    }
    if profile.honor_bypass && bypass.is_success() {
        return None;
    }
    if options
        .textual_gate_max_chars
        .is_some_and(|max| body.chars().count() >= max)
    {
        return None;
    }

    PAYWALL_PHRASING
        .find(body)
        .map(|m| PaywallSignal::Phrasing(m.as_str().to_string()))
}
