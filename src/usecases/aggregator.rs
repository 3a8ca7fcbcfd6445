//! Persona aggregation. Runs every analyzer over the same items in dimension order.

use crate::domain::analysis::{category_analyzers, Analyzer, OverviewAnalyzer};
use crate::domain::{ContentItem, EvidenceLedger, PersonaRecord, UserInfo};
use tracing::debug;

/// Runs the overview plus the eight category analyzers and merges their results.
pub struct PersonaAggregator {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl PersonaAggregator {
    pub fn new() -> Self {
        Self {
            analyzers: category_analyzers(),
        }
    }

    /// Build the persona record. Empty input yields the degenerate record
    /// (overview summary only); callers decide whether that is worth rendering.
    pub fn aggregate(&self, items: &[ContentItem], user: &UserInfo) -> PersonaRecord {
        let overview: Box<dyn Analyzer> = Box::new(OverviewAnalyzer::new(user.username.clone()));
        let analyzers = std::iter::once(&overview).chain(self.analyzers.iter());

        PersonaRecord::from_results(analyzers.map(|analyzer| {
            let result = analyzer.analyze(items);
            debug!(
                dimension = %analyzer.dimension(),
                findings = result.analysis.len(),
                citations = result.citations.len(),
                "dimension analyzed"
            );
            (analyzer.dimension(), result)
        }))
    }

    /// Flatten all citations in dimension order.
    pub fn collect_citations(record: &PersonaRecord) -> EvidenceLedger {
        EvidenceLedger::from_record(record)
    }
}

impl Default for PersonaAggregator {
    fn default() -> Self {
        Self::new()
    }
}
