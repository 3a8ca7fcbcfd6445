//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ContentItem, DomainError, UserInfo};
use std::path::PathBuf;

/// Source of a user's normalized posts and comments.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch up to `limit` items for `username`, already filtered of deleted/removed content.
    ///
    /// An empty vector is a valid answer (the user has nothing public).
    async fn fetch_user_content(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<(Vec<ContentItem>, UserInfo), DomainError>;
}

/// Destination for rendered reports.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Persist `body` under `file_name`. Returns where it was written.
    async fn write_report(&self, file_name: &str, body: &str) -> Result<PathBuf, DomainError>;
}
