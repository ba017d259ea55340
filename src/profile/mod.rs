//! Site Profiles
//!
//! A [`SiteProfile`] is the per-publisher configuration that drives every
//! stage of the pipeline: the ordered body-selector cascade, noise selectors
//! and classes, metadata selectors, paywall markers, overlay selectors for the
//! renderer and, for feed-style pages, the stream item layout.
//!
//! Profiles are plain data. They are loaded once (usually through
//! [`ProfileRegistry`]) and never mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use rs_news_extract::profile::SiteProfile;
//! use rs_news_extract::selector::Selector;
//!
//! let profile = SiteProfile {
//!     name: "example".to_string(),
//!     body_selectors: vec![".story-body".parse()?, Selector::tag("article")],
//!     boilerplate_classes: vec!["related-content".to_string()],
//!     ..SiteProfile::default()
//! };
//! assert!(profile.is_article());
//! # Ok::<(), rs_news_extract::Error>(())
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::selector::Selector;

pub mod registry;

pub use registry::ProfileRegistry;

/// Tags removed from the body unconditionally unless a profile overrides the list.
pub const DEFAULT_STRIP_TAGS: [&str; 5] = ["script", "style", "iframe", "svg", "noscript"];

/// Per-publisher extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Profile name, unique within a registry.
    pub name: String,

    /// Hosts this profile serves; subdomains match too.
    pub domains: Vec<String>,

    /// Body container cascade, most specific first.
    pub body_selectors: Vec<Selector>,

    /// Subtrees removed from the located body wherever they appear.
    pub unwanted_selectors: Vec<Selector>,

    /// Class tokens that disqualify a text block.
    pub boilerplate_classes: Vec<String>,

    /// Block-level phrases that mark boilerplate ("MORE: ...").
    pub boilerplate_phrases: Vec<PhrasePattern>,

    /// Tags dropped from the body together with their contents.
    pub strip_tags: Vec<String>,

    /// Title, author and date selector fallbacks.
    pub metadata: MetadataSelectors,

    /// Elements inside the body that mark a paywalled article.
    pub paywall_indicators: Vec<Selector>,

    /// Whether subscribe/sign-up phrasing in the body counts as a paywall.
    pub paywall_text_check: bool,

    /// Whether a successful overlay dismissal relaxes the phrasing check.
    pub honor_bypass: bool,

    /// Close buttons and consent prompts the renderer should try to dismiss.
    pub overlay_selectors: Vec<Selector>,

    /// Live-update feed embedded in an article page.
    pub live_feed: Option<LiveFeed>,

    /// Article page or chronological stream.
    pub kind: ProfileKind,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            domains: Vec::new(),
            body_selectors: Vec::new(),
            unwanted_selectors: Vec::new(),
            boilerplate_classes: Vec::new(),
            boilerplate_phrases: Vec::new(),
            strip_tags: DEFAULT_STRIP_TAGS.iter().map(|t| (*t).to_string()).collect(),
            metadata: MetadataSelectors::default(),
            paywall_indicators: Vec::new(),
            paywall_text_check: true,
            honor_bypass: true,
            overlay_selectors: Vec::new(),
            live_feed: None,
            kind: ProfileKind::Article,
        }
    }
}

impl SiteProfile {
    /// Profile used when no publisher-specific profile applies.
    ///
    /// Relies on the locator's generic fallback (`article`, `main`,
    /// `[role=main]`, paragraph density) and strips the usual page chrome.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            name: "generic".to_string(),
            unwanted_selectors: ["header", "footer", "aside", "nav"]
                .iter()
                .map(|t| Selector::tag(t))
                .collect(),
            boilerplate_classes: ["paywall", "ad", "promo", "social-share"]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            ..Self::default()
        }
    }

    /// Whether this profile extracts a single article.
    #[must_use]
    pub fn is_article(&self) -> bool {
        matches!(self.kind, ProfileKind::Article)
    }

    /// Whether the rendered text carries a "By <author>" line.
    #[must_use]
    pub fn has_byline(&self) -> bool {
        !self.metadata.author.is_empty() || !self.metadata.date.is_empty()
    }

    /// Whether `tag` is in the strip list.
    #[must_use]
    pub fn strips(&self, tag: &str) -> bool {
        self.strip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether a text block matches one of the boilerplate phrases.
    #[must_use]
    pub fn is_boilerplate_phrase(&self, text: &str) -> bool {
        self.boilerplate_phrases.iter().any(|p| p.is_match(text))
    }
}

/// Ordered selector fallbacks for the metadata fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataSelectors {
    /// Title candidates; default is the first `<h1>`.
    pub title: Vec<Selector>,
    /// Byline candidates.
    pub author: Vec<Selector>,
    /// Publication date candidates.
    pub date: Vec<Selector>,
}

impl Default for MetadataSelectors {
    fn default() -> Self {
        Self {
            title: vec![Selector::tag("h1")],
            author: Vec::new(),
            date: Vec::new(),
        }
    }
}

/// Live-update feed inside an article page (e.g. a sports live blog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveFeed {
    /// Feed container.
    pub container: Selector,
    /// One update inside the container.
    pub item: Selector,
}

/// Extraction flavor of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileKind {
    /// One article per page.
    #[default]
    Article,
    /// A chronological feed of posts and comments.
    Stream(StreamProfile),
}

/// Layout of a feed-style page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamProfile {
    /// Repeating item container.
    pub item: Selector,
    /// Fields of an item classified as a post.
    pub post: PostFields,
    /// Fields of an item classified as a comment.
    #[serde(default)]
    pub comment: Option<CommentFields>,
}

/// Where a post's fields live inside its item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    /// Title element; its presence makes the item a post.
    pub title: Selector,
    /// Anchor carrying the URL when the title is not itself an anchor.
    #[serde(default)]
    pub link: Option<Selector>,
    /// Score element.
    #[serde(default)]
    pub score: Option<Selector>,
    /// Author element.
    #[serde(default)]
    pub author: Option<Selector>,
    /// Comment-count link.
    #[serde(default)]
    pub comments: Option<Selector>,
    /// Score/author live in the item's next sibling row.
    #[serde(default)]
    pub details_in_next_sibling: bool,
}

/// Where a comment's fields live inside its item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFields {
    /// Comment text; its presence makes the item a comment.
    pub text: Selector,
    /// Comment author.
    #[serde(default)]
    pub author: Option<Selector>,
}

/// A compiled boilerplate phrase, serialized as its pattern string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhrasePattern(Regex);

impl PhrasePattern {
    /// Compile a phrase pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> crate::Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Whether `text` matches.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for PhrasePattern {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhrasePattern> for String {
    fn from(p: PhrasePattern) -> Self {
        p.0.as_str().to_string()
    }
}

impl PartialEq for PhrasePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
