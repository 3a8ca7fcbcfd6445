//! Domain entities. Pure data structures for the core business.
//!
//! No Reddit/IO types here; adapters map into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content markers Reddit leaves behind for deleted or moderated items.
const SENTINEL_CONTENT: [&str; 3] = ["[deleted]", "[removed]", ""];

/// Whether a content item is an original post or a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Comment,
    /// The upstream record did not say.
    #[default]
    Unknown,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Comment => "comment",
            ContentKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single post or comment, normalized from a listing record.
///
/// Every field defaults when missing so malformed records never halt analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub title: String,
    /// Posts: `"{title} {selftext}"`. Comments: the comment body.
    pub content: String,
    /// Subreddit name without the `r/` prefix. May be empty.
    pub community: String,
    pub score: i64,
    pub created_at: f64,
    pub source_url: String,
    pub kind: ContentKind,
}

impl ContentItem {
    /// True when `content` is one of the deleted/removed/empty markers.
    pub fn is_sentinel_content(content: &str) -> bool {
        let lowered = content.to_lowercase();
        SENTINEL_CONTENT.contains(&lowered.as_str())
    }

    /// Lower-cased content used by every keyword scan.
    pub fn content_lower(&self) -> String {
        self.content.to_lowercase()
    }
}

/// Minimal account info captured alongside the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub username: Option<String>,
    pub account_created: f64,
    pub total_karma: i64,
}

impl UserInfo {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }
}

/// Where a citation's evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Post,
    Comment,
    Unknown,
    /// Derived from a cross-item statistic rather than one item.
    Aggregate,
}

impl From<ContentKind> for SourceKind {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Post => SourceKind::Post,
            ContentKind::Comment => SourceKind::Comment,
            ContentKind::Unknown => SourceKind::Unknown,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::Post => "post",
            SourceKind::Comment => "comment",
            SourceKind::Unknown => "unknown",
            SourceKind::Aggregate => "aggregate",
        };
        f.write_str(s)
    }
}

/// One unit of evidence linking a finding back to its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Tag of the analysis dimension that produced it (e.g. `demographics`).
    pub category: String,
    pub indicator: String,
    pub evidence: String,
    pub source_url: String,
    pub source_kind: SourceKind,
}

impl Citation {
    /// Placeholder URL carried by aggregate citations.
    pub const AGGREGATE_SOURCE: &'static str = "Overall pattern analysis";

    /// Citation pointing at a specific item.
    pub fn for_item(
        category: &str,
        indicator: impl Into<String>,
        evidence: impl Into<String>,
        item: &ContentItem,
    ) -> Self {
        Self {
            category: category.to_string(),
            indicator: indicator.into(),
            evidence: evidence.into(),
            source_url: item.source_url.clone(),
            source_kind: item.kind.into(),
        }
    }

    /// Citation derived from a statistic over all items.
    pub fn aggregate(
        category: &str,
        indicator: impl Into<String>,
        evidence: impl Into<String>,
    ) -> Self {
        Self {
            category: category.to_string(),
            indicator: indicator.into(),
            evidence: evidence.into(),
            source_url: Self::AGGREGATE_SOURCE.to_string(),
            source_kind: SourceKind::Aggregate,
        }
    }
}
