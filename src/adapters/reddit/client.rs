//! Implements ContentSource using Reddit's public JSON listings.
//!
//! Paginates `/user/{name}.json` with the `after` cursor and sleeps between
//! page requests to stay under the unauthenticated rate limit.

use crate::adapters::reddit::mapper::{self, Listing};
use crate::domain::{ContentItem, DomainError, UserInfo};
use crate::ports::ContentSource;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Reddit caps listing pages at 100 children.
pub const MAX_PAGE_SIZE: usize = 100;

/// Reddit listing client.
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
    /// Sleep between consecutive page requests (rate limiting).
    request_delay: Duration,
    page_size: usize,
}

impl RedditClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `base_url` - e.g. "https://www.reddit.com" (no trailing slash needed)
    /// * `user_agent` - Reddit rejects requests without a descriptive User-Agent
    /// * `request_delay` - pause before every page after the first
    /// * `page_size` - children requested per page, clamped to 1..=100
    pub fn new(
        base_url: &str,
        user_agent: &str,
        request_delay: Duration,
        page_size: usize,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| DomainError::Fetch(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_delay,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    fn listing_url(&self, username: &str, limit: usize, after: Option<&str>) -> String {
        let mut url = format!("{}/user/{}.json?limit={}", self.base_url, username, limit);
        if let Some(cursor) = after {
            url.push_str("&after=");
            url.push_str(cursor);
        }
        url
    }

    async fn fetch_page(&self, url: &str) -> Result<Listing, DomainError> {
        debug!(url, "requesting listing page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, url, "Reddit returned error");
            return Err(DomainError::Fetch(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        response
            .json::<Listing>()
            .await
            .map_err(|e| DomainError::Parse(format!("Failed to parse listing: {}", e)))
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn fetch_user_content(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<(Vec<ContentItem>, UserInfo), DomainError> {
        let mut items = Vec::new();
        let mut user = UserInfo::named(username);
        let mut seen = 0usize;
        let mut after: Option<String> = None;

        while seen < limit {
            if seen > 0 {
                tokio::time::sleep(self.request_delay).await;
            }
            let page_limit = (limit - seen).min(self.page_size);
            let url = self.listing_url(username, page_limit, after.as_deref());
            let page = self.fetch_page(&url).await?;

            let children = page.children().len();
            if seen == 0 {
                if page.data.is_none() {
                    warn!(username, "no data found for user");
                }
                user = mapper::user_info(&page, username);
            }
            if children == 0 {
                break;
            }

            items.extend(mapper::listings_to_items([&page], page_limit));
            seen += children.min(page_limit);

            match page.after() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        info!(
            username,
            items = items.len(),
            scanned = seen,
            "scraped posts/comments"
        );
        Ok((items, user))
    }
}
