//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The analysis core itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Could not extract username from URL: {0}")]
    InvalidProfileUrl(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Upstream listing could not be decoded.
    #[error("Listing parse error: {0}")]
    Parse(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("No posts found for user {0}. Cannot generate persona.")]
    NoContent(String),
}
