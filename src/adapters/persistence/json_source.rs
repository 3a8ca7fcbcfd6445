//! Implements ContentSource over a saved Reddit listing file.
//!
//! Accepts either one listing page or an array of pages, exactly as returned by
//! `/user/{name}.json`. Useful for offline runs and tests.

use crate::adapters::reddit::mapper::{self, Listing};
use crate::domain::{ContentItem, DomainError, UserInfo};
use crate::ports::ContentSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingFile {
    Pages(Vec<Listing>),
    Page(Listing),
}

impl ListingFile {
    fn into_pages(self) -> Vec<Listing> {
        match self {
            ListingFile::Pages(pages) => pages,
            ListingFile::Page(page) => vec![page],
        }
    }
}

/// Listing JSON on disk.
pub struct JsonListingSource {
    path: PathBuf,
}

impl JsonListingSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Vec<Listing>, DomainError> {
        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Fetch(format!("read {}: {}", self.path.display(), e))
        })?;
        let file: ListingFile = serde_json::from_str(&text).map_err(|e| {
            DomainError::Parse(format!("listing {}: {}", self.path.display(), e))
        })?;
        Ok(file.into_pages())
    }
}

#[async_trait::async_trait]
impl ContentSource for JsonListingSource {
    async fn fetch_user_content(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<(Vec<ContentItem>, UserInfo), DomainError> {
        let pages = self.load().await?;
        let user = pages
            .first()
            .map(|page| mapper::user_info(page, username))
            .unwrap_or_else(|| UserInfo::named(username));
        let items = mapper::listings_to_items(&pages, limit);
        info!(
            path = %self.path.display(),
            pages = pages.len(),
            items = items.len(),
            "loaded saved listing"
        );
        Ok((items, user))
    }
}
