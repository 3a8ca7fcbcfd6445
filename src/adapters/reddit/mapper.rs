//! Map Reddit listing JSON to domain entities.
//!
//! Extracts ContentItem and UserInfo from `/user/{name}.json` listing children.

use crate::domain::{ContentItem, ContentKind, UserInfo};
use serde::Deserialize;

const PERMALINK_HOST: &str = "https://reddit.com";

/// One page of a user listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: Option<ListingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
    /// Pagination cursor; absent on the last page.
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thing {
    #[serde(default)]
    pub data: RawItem,
}

/// Fields we read from a post (`t3`) or comment (`t1`). Everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub title: Option<String>,
    pub selftext: Option<String>,
    /// Present only on comments.
    pub body: Option<String>,
    pub subreddit: Option<String>,
    pub score: i64,
    pub created_utc: f64,
    pub permalink: Option<String>,
    pub total_karma: i64,
}

impl Listing {
    pub fn children(&self) -> &[Thing] {
        self.data.as_ref().map(|d| d.children.as_slice()).unwrap_or(&[])
    }

    pub fn after(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.after.as_deref())
    }
}

/// Map one listing record. Returns `None` for deleted/removed/empty content.
///
/// * record with `body` → Comment (content = body).
/// * otherwise → Post (content = `"{title} {selftext}"`).
pub fn raw_to_item(raw: &RawItem) -> Option<ContentItem> {
    let title = raw.title.clone().unwrap_or_default();
    let (kind, content) = match &raw.body {
        Some(body) => (ContentKind::Comment, body.clone()),
        None => (
            ContentKind::Post,
            format!("{} {}", title, raw.selftext.as_deref().unwrap_or_default()),
        ),
    };

    if ContentItem::is_sentinel_content(&content) {
        return None;
    }

    Some(ContentItem {
        title,
        content,
        community: raw.subreddit.clone().unwrap_or_default(),
        score: raw.score,
        created_at: raw.created_utc,
        source_url: format!(
            "{}{}",
            PERMALINK_HOST,
            raw.permalink.as_deref().unwrap_or_default()
        ),
        kind,
    })
}

/// Map the first `limit` children across pages, dropping sentinel content.
pub fn listings_to_items<'a>(
    pages: impl IntoIterator<Item = &'a Listing>,
    limit: usize,
) -> Vec<ContentItem> {
    pages
        .into_iter()
        .flat_map(Listing::children)
        .take(limit)
        .filter_map(|thing| raw_to_item(&thing.data))
        .collect()
}

/// Account info taken from the first child of the first page.
pub fn user_info(first_page: &Listing, username: &str) -> UserInfo {
    let first = first_page.children().first().map(|t| &t.data);
    UserInfo {
        username: Some(username.to_string()),
        account_created: first.map_or(0.0, |r| r.created_utc),
        total_karma: first.map_or(0, |r| r.total_karma),
    }
}
