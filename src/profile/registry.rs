//! Profile registry and site-identity lookup.

use std::path::Path;

use url::Url;

use super::SiteProfile;
use crate::error::{Error, Result};

/// Publisher profiles bundled with the crate.
const BUILTIN_PROFILES: &str = include_str!("../../profiles/builtin.json");

/// Immutable set of site profiles, looked up by name or by page URL.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<SiteProfile>,
    fallback: SiteProfile,
}

impl ProfileRegistry {
    /// Build a registry from profiles.
    ///
    /// A profile named `"generic"` becomes the fallback for unknown hosts;
    /// without one, [`SiteProfile::generic`] is used.
    #[must_use]
    pub fn new(profiles: Vec<SiteProfile>) -> Self {
        let fallback = profiles
            .iter()
            .find(|p| p.name == "generic")
            .cloned()
            .unwrap_or_else(SiteProfile::generic);
        Self { profiles, fallback }
    }

    /// The publisher profiles shipped in `profiles/builtin.json`.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled profile file is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PROFILES)
    }

    /// Parse a JSON array of profiles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileParse`] when the document or any selector or
    /// phrase pattern inside it is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profiles: Vec<SiteProfile> = serde_json::from_str(json)?;
        tracing::debug!(count = profiles.len(), "loaded site profiles");
        Ok(Self::new(profiles))
    }

    /// Read and parse a JSON profile file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Profile by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProfile`] when no profile has that name.
    pub fn get(&self, name: &str) -> Result<&SiteProfile> {
        if name == self.fallback.name {
            return Ok(&self.fallback);
        }
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// Profile for a page URL, falling back to the generic profile.
    ///
    /// The most specific domain wins, so `sport.example.com` beats
    /// `example.com` when both are registered.
    #[must_use]
    pub fn lookup(&self, url: &str) -> &SiteProfile {
        let Some(host) = site_key(url) else {
            return &self.fallback;
        };

        self.profiles
            .iter()
            .filter_map(|p| {
                p.domains
                    .iter()
                    .filter(|d| domain_matches(&host, d))
                    .map(String::len)
                    .max()
                    .map(|len| (len, p))
            })
            .max_by_key(|(len, _)| *len)
            .map_or(&self.fallback, |(_, p)| p)
    }

    /// The fallback profile.
    #[must_use]
    pub fn fallback(&self) -> &SiteProfile {
        &self.fallback
    }

    /// All registered profiles, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &SiteProfile> {
        self.profiles.iter()
    }
}

/// Normalized host of a URL: lowercase, no trailing dot, no `www.`.
///
/// Scheme-less input (`bbc.co.uk/sport`) is accepted.
#[must_use]
pub fn site_key(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = Url::parse(url)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{url}")).ok())?;

    let host = parsed.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").map_or(host.clone(), str::to_string);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

fn domain_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim_start_matches("www.").to_ascii_lowercase();
    host == domain || host.strip_suffix(domain.as_str()).is_some_and(|rest| rest.ends_with('.'))
}
