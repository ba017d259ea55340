//! Live/Stream Collector
//!
//! Feed-style pages (aggregator front pages, discussion threads, sports live
//! blogs) are a chronological list of items rather than one article.
//!
//! - [`collect_entries`] classifies each item of a [`StreamProfile`] as a post
//!   (it has a title) or a comment (it has comment text) and renders it.
//! - [`live_updates`] collects the update feed embedded in an article page.
//! - [`stabilizer`] is the scroll-and-settle state machine that decides when
//!   an infinite-scroll page is ready to capture.

use std::fmt;

use dom_query::Selection;

use crate::dom;
use crate::normalize::collapse_whitespace;
use crate::profile::{CommentFields, LiveFeed, PostFields, StreamProfile};
use crate::selector::{self, Selector};
use crate::snapshot::Snapshot;

pub mod stabilizer;

pub use stabilizer::{Stabilizer, StabilizerState};

/// Score placeholder for posts without one.
pub const NO_SCORE: &str = "No score";

/// Author placeholder for posts and comments without one.
pub const NO_AUTHOR: &str = "No author";

/// One classified feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEntry {
    /// A submitted story or link.
    Post(Post),
    /// A reply in a discussion.
    Comment(Comment),
}

/// A post's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    /// Link target; empty when the post has none.
    pub url: String,
    pub score: String,
    pub author: String,
    /// Comment-count text, only when the profile names a selector for it.
    pub comments: Option<String>,
}

/// A comment's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

impl fmt::Display for StreamEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post(post) => {
                write!(
                    f,
                    "Title: {}\nURL: {}\nScore: {}\nAuthor: {}",
                    post.title, post.url, post.score, post.author
                )?;
                if let Some(comments) = &post.comments {
                    write!(f, "\nComments: {comments}")?;
                }
                Ok(())
            }
            Self::Comment(comment) => write!(f, "Comment by {}: {}", comment.author, comment.text),
        }
    }
}

/// Classify every feed item of the snapshot, in document order.
///
/// Items matching one of `unwanted` (promoted posts, ads) are skipped, as
/// are items that are neither posts nor comments.
#[must_use]
pub fn collect_entries(snapshot: &Snapshot, profile: &StreamProfile, unwanted: &[Selector]) -> Vec<StreamEntry> {
    let items = snapshot.query_all(&profile.item);
    let total = items.len();

    let entries: Vec<StreamEntry> = items
        .iter()
        .filter(|item| !unwanted.iter().any(|u| u.matches(item)))
        .filter_map(|item| classify(item, profile))
        .collect();

    tracing::debug!(items = total, entries = entries.len(), "stream items classified");
    entries
}

/// Post if the item has a title, else comment if it has comment text.
#[must_use]
pub fn classify(item: &Selection, profile: &StreamProfile) -> Option<StreamEntry> {
    if let Some(title) = selector::query(item, &profile.post.title) {
        return Some(StreamEntry::Post(read_post(item, &title, &profile.post)));
    }

    let fields = profile.comment.as_ref()?;
    let text = selector::query(item, &fields.text)?;
    Some(StreamEntry::Comment(read_comment(item, &text, fields)))
}

fn read_post(item: &Selection, title: &Selection, fields: &PostFields) -> Post {
    let anchor = if dom::is_one_of(title, &["a"]) {
        Some(title.clone())
    } else {
        fields
            .link
            .as_ref()
            .and_then(|link| selector::query(title, link).or_else(|| selector::query(item, link)))
            .or_else(|| selector::query(title, &Selector::tag("a")))
    };
    let url = anchor
        .and_then(|a| dom::get_attribute(&a, "href"))
        .unwrap_or_default();

    // Some feeds put the score/author row right after the title row.
    let details = if fields.details_in_next_sibling {
        dom::next_element_sibling(item)
    } else {
        Some(item.clone())
    };
    let detail = |sel: Option<&Selector>| -> Option<String> {
        let found = selector::query(details.as_ref()?, sel?)?;
        Some(text_of(&found)).filter(|t| !t.is_empty())
    };

    Post {
        title: text_of(title),
        url,
        score: detail(fields.score.as_ref()).unwrap_or_else(|| NO_SCORE.to_string()),
        author: detail(fields.author.as_ref()).unwrap_or_else(|| NO_AUTHOR.to_string()),
        comments: fields.comments.as_ref().map(|sel| {
            selector::query(item, sel)
                .map(|c| text_of(&c))
                .unwrap_or_default()
        }),
    }
}

fn read_comment(item: &Selection, text: &Selection, fields: &CommentFields) -> Comment {
    let author = fields
        .author
        .as_ref()
        .and_then(|sel| selector::query(item, sel))
        .map(|a| text_of(&a))
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| NO_AUTHOR.to_string());

    Comment {
        author,
        text: text_of(text),
    }
}

/// Text of each live update in an article page's feed, in document order.
///
/// Rendered line breaks inside an update are kept as `\n`. Only the first
/// container match is read; an absent feed yields nothing.
#[must_use]
pub fn live_updates(snapshot: &Snapshot, feed: &LiveFeed) -> Vec<String> {
    let Some(container) = snapshot.query(&feed.container) else {
        tracing::debug!(container = %feed.container, "no live feed on page");
        return Vec::new();
    };

    selector::query_all(&container, &feed.item)
        .iter()
        .map(|item| dom::rendered_lines(item).join("\n"))
        .filter(|text| !text.is_empty())
        .collect()
}

fn text_of(sel: &Selection) -> String {
    collapse_whitespace(&dom::stripped_text(sel))
}
