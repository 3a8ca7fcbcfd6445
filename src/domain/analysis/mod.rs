//! Category analyzers. Each one is a pure function of the item slice and the
//! static taxonomies, producing findings plus citations for a single dimension.

pub mod communication;
pub mod demographics;
pub mod interests;
pub mod mentions;
pub mod online_behavior;
pub mod overview;
pub mod personality;
pub mod scorer;
pub mod technical;

use crate::domain::{CategoryResult, ContentItem, Dimension};

pub use communication::CommunicationAnalyzer;
pub use demographics::DemographicsAnalyzer;
pub use interests::InterestsAnalyzer;
pub use mentions::{lifestyle_analyzer, values_analyzer, MentionAnalyzer};
pub use online_behavior::OnlineBehaviorAnalyzer;
pub use overview::OverviewAnalyzer;
pub use personality::PersonalityAnalyzer;
pub use scorer::{CitationCap, KeywordScorer, MatchPolicy};
pub use technical::TechnicalAnalyzer;

/// One analysis dimension.
///
/// Implementations must not panic on empty input; they return an empty result instead.
pub trait Analyzer: Send + Sync {
    fn dimension(&self) -> Dimension;

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult;
}

/// The eight category analyzers, in dimension order (overview excluded).
pub fn category_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(DemographicsAnalyzer),
        Box::new(InterestsAnalyzer),
        Box::new(PersonalityAnalyzer),
        Box::new(CommunicationAnalyzer),
        Box::new(lifestyle_analyzer()),
        Box::new(values_analyzer()),
        Box::new(OnlineBehaviorAnalyzer),
        Box::new(TechnicalAnalyzer),
    ]
}

/// Arithmetic mean of item scores; 0 for no items.
pub(crate) fn mean_score(items: &[ContentItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(|i| i.score as f64).sum::<f64>() / items.len() as f64
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_analyzers_in_dimension_order() {
        let dims: Vec<Dimension> = category_analyzers().iter().map(|a| a.dimension()).collect();
        assert_eq!(dims, Dimension::ALL[1..].to_vec());
    }

    #[test]
    fn test_every_analyzer_tolerates_empty_input() {
        for analyzer in category_analyzers() {
            let result = analyzer.analyze(&[]);
            assert!(result.analysis.is_empty(), "{}", analyzer.dimension());
            assert!(result.citations.is_empty(), "{}", analyzer.dimension());
        }
    }
}
