//! Persona service. Orchestrates the fetch → analyze → render → write workflow.
//!
//! Coordinates between content source (data), aggregator (analysis), renderer and report sink.

use crate::domain::DomainError;
use crate::ports::{ContentSource, ReportSink};
use crate::usecases::aggregator::PersonaAggregator;
use crate::usecases::report_renderer;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// What to build a persona for.
#[derive(Debug, Clone)]
pub struct PersonaRequest {
    /// Shown verbatim in the report header.
    pub profile_url: String,
    pub username: String,
    pub limit: usize,
    /// Report file name; defaults to `{username}_persona.txt`.
    pub output_name: Option<String>,
    pub generated_at: NaiveDateTime,
}

impl PersonaRequest {
    pub fn file_name(&self) -> String {
        self.output_name
            .clone()
            .unwrap_or_else(|| format!("{}_persona.txt", self.username))
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct PersonaOutcome {
    pub path: PathBuf,
    pub items_analyzed: usize,
    pub citations: usize,
}

/// Service for building persona reports.
///
/// Orchestrates the flow:
/// 1. Fetch the user's posts and comments from the content source
/// 2. Run every analyzer over them
/// 3. Render the report and hand it to the sink
pub struct PersonaService {
    source: Arc<dyn ContentSource>,
    sink: Arc<dyn ReportSink>,
    aggregator: PersonaAggregator,
}

impl PersonaService {
    /// Create a new persona service.
    ///
    /// # Arguments
    /// * `source` - Content source implementation (Reddit API, saved listing, etc.)
    /// * `sink` - Where rendered reports are written
    pub fn new(source: Arc<dyn ContentSource>, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            source,
            sink,
            aggregator: PersonaAggregator::new(),
        }
    }

    /// Build and persist the persona report for one user.
    ///
    /// Fails with `NoContent` when the source returns nothing to analyze.
    pub async fn generate(&self, request: &PersonaRequest) -> Result<PersonaOutcome, DomainError> {
        info!(username = %request.username, limit = request.limit, "fetching user content");
        let (items, mut user) = self
            .source
            .fetch_user_content(&request.username, request.limit)
            .await?;

        if items.is_empty() {
            warn!(username = %request.username, "no posts or comments found");
            return Err(DomainError::NoContent(request.username.clone()));
        }
        if user.username.is_none() {
            user.username = Some(request.username.clone());
        }

        info!(items = items.len(), "analyzing posts and comments");
        let record = self.aggregator.aggregate(&items, &user);
        let ledger = PersonaAggregator::collect_citations(&record);

        let body = report_renderer::render(
            &record,
            &ledger,
            &request.profile_url,
            &request.username,
            request.generated_at,
        );
        let path = self.sink.write_report(&request.file_name(), &body).await?;

        info!(
            path = %path.display(),
            items = items.len(),
            citations = ledger.len(),
            "persona generated"
        );

        Ok(PersonaOutcome {
            path,
            items_analyzed: items.len(),
            citations: ledger.len(),
        })
    }
}
