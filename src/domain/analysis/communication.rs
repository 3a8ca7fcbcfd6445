//! Communication style: formal vs informal register.

use super::Analyzer;
use super::scorer::{CitationCap, KeywordScorer, MatchPolicy};
use crate::domain::taxonomy::REGISTER;
use crate::domain::{CategoryResult, ContentItem, Dimension, Finding, Findings};

pub struct CommunicationAnalyzer;

impl Analyzer for CommunicationAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Communication
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        if items.is_empty() {
            return CategoryResult::empty();
        }

        // One increment per item and register, however many markers it holds.
        let scorer = KeywordScorer::new(REGISTER, MatchPolicy::FirstPerItem, CitationCap::Unlimited);
        let scores = scorer.score(items);
        let count_for = |label: &str| {
            scores
                .iter()
                .find(|s| s.label == label)
                .map_or(0, |s| s.count())
        };
        let formal = count_for("formal");
        let informal = count_for("informal");

        let tone = if formal > informal {
            "Formal and professional"
        } else if informal > formal {
            "Casual and informal"
        } else {
            "Mixed formal and informal"
        };

        let mut analysis = Findings::new();
        analysis.insert("tone", Finding::scalar(tone));
        CategoryResult::new(analysis, Vec::new())
    }
}
