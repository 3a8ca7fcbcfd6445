//! Mention tallies for lifestyle and values: every keyword hit counts, the
//! first few per category are cited.

use super::Analyzer;
use super::scorer::{CitationCap, KeywordScorer, MatchPolicy};
use crate::domain::taxonomy::{LIFESTYLE, VALUES};
use crate::domain::{CategoryResult, Citation, ContentItem, Dimension, Finding, Findings};

/// Builds the finding text for a category's mention count.
type LabelFn = fn(usize) -> String;
/// Builds the citation evidence for a matched keyword.
type EvidenceFn = fn(&str) -> String;

/// Keyword-mention analyzer parameterized by taxonomy, citation cap and labels.
pub struct MentionAnalyzer {
    dimension: Dimension,
    tag: &'static str,
    scorer: KeywordScorer,
    label: LabelFn,
    evidence: EvidenceFn,
}

impl MentionAnalyzer {
    pub fn new(
        dimension: Dimension,
        tag: &'static str,
        scorer: KeywordScorer,
        label: LabelFn,
        evidence: EvidenceFn,
    ) -> Self {
        Self {
            dimension,
            tag,
            scorer,
            label,
            evidence,
        }
    }
}

impl Analyzer for MentionAnalyzer {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        let mut analysis = Findings::new();
        let mut citations = Vec::new();

        for category in self.scorer.score(items) {
            for hit in category.cited() {
                citations.push(Citation::for_item(
                    self.tag,
                    category.label,
                    (self.evidence)(hit.keyword),
                    hit.item,
                ));
            }
            if !category.is_empty() {
                analysis.insert(category.label, Finding::Scalar((self.label)(category.count())));
            }
        }

        CategoryResult::new(analysis, citations)
    }
}

/// Interest level for a lifestyle mention count.
pub fn interest_level(count: usize) -> &'static str {
    if count > 5 {
        "High"
    } else if count > 2 {
        "Medium"
    } else {
        "Low"
    }
}

pub fn lifestyle_analyzer() -> MentionAnalyzer {
    MentionAnalyzer::new(
        Dimension::Lifestyle,
        "lifestyle",
        KeywordScorer::new(LIFESTYLE, MatchPolicy::EveryMention, CitationCap::First(3)),
        |count| format!("Interest level: {}", interest_level(count)),
        |keyword| format!("Mentioned '{keyword}'"),
    )
}

pub fn values_analyzer() -> MentionAnalyzer {
    MentionAnalyzer::new(
        Dimension::Values,
        "values",
        KeywordScorer::new(VALUES, MatchPolicy::EveryMention, CitationCap::First(2)),
        |count| format!("Evidence of this value: {count} mentions"),
        |keyword| format!("Discussion about '{keyword}'"),
    )
}
