//! Personality: verbosity, sentiment balance and question-asking habits.

use super::Analyzer;
use super::scorer::count_occurrences;
use crate::domain::taxonomy::SENTIMENT;
use crate::domain::{CategoryResult, Citation, ContentItem, Dimension, Finding, Findings};
use tracing::debug;

const CITATION_TAG: &str = "personality";
const DETAILED_WORDS_PER_ITEM: f64 = 50.0;
const INQUISITIVE_QUESTIONS_PER_ITEM: f64 = 0.3;

/// Raw counters the traits are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    pub items: usize,
    pub words: usize,
    pub questions: usize,
    pub exclamations: usize,
    pub positive: usize,
    pub negative: usize,
}

impl TextStats {
    pub fn collect(items: &[ContentItem]) -> Self {
        let positive_words = SENTIMENT.keywords("positive").unwrap_or_default();
        let negative_words = SENTIMENT.keywords("negative").unwrap_or_default();

        let mut stats = TextStats {
            items: items.len(),
            ..TextStats::default()
        };
        for item in items {
            let content = &item.content;
            stats.words += content.split_whitespace().count();
            stats.questions += content.matches('?').count();
            stats.exclamations += content.matches('!').count();

            let lowered = content.to_lowercase();
            stats.positive += count_occurrences(&lowered, positive_words);
            stats.negative += count_occurrences(&lowered, negative_words);
        }
        stats
    }

    pub fn mean_words(&self) -> f64 {
        if self.items == 0 {
            0.0
        } else {
            self.words as f64 / self.items as f64
        }
    }
}

pub struct PersonalityAnalyzer;

impl Analyzer for PersonalityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Personality
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        if items.is_empty() {
            return CategoryResult::empty();
        }

        let stats = TextStats::collect(items);
        debug!(?stats, "personality counters");

        let mut traits = Findings::new();
        let mut citations = Vec::new();

        let mean_words = stats.mean_words();
        if mean_words > DETAILED_WORDS_PER_ITEM {
            traits.insert(
                "communication_style",
                Finding::scalar("Detailed and expressive"),
            );
            citations.push(Citation::aggregate(
                CITATION_TAG,
                "Detailed communication style",
                format!("Average {mean_words:.1} words per post"),
            ));
        }

        let sentiment = if stats.positive > stats.negative * 2 {
            "Generally positive and optimistic"
        } else if stats.negative > stats.positive {
            "More critical or analytical"
        } else {
            "Balanced emotional expression"
        };
        traits.insert("sentiment", Finding::scalar(sentiment));

        if stats.questions as f64 > stats.items as f64 * INQUISITIVE_QUESTIONS_PER_ITEM {
            traits.insert(
                "engagement_style",
                Finding::scalar("Inquisitive and engaging"),
            );
        }

        CategoryResult::new(traits, citations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceKind;
    use crate::domain::analysis::test_support::post;

    fn scalar<'a>(result: &'a CategoryResult, key: &str) -> Option<&'a str> {
        result.analysis.get(key).and_then(Finding::as_scalar)
    }

    #[test]
    fn test_stats_counting() {
        let stats = TextStats::collect(&[post("Great? Really great!! I hate bad days?")]);
        assert_eq!(stats.words, 7);
        assert_eq!(stats.questions, 2);
        assert_eq!(stats.exclamations, 2);
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.negative, 2);
    }

    #[test]
    fn test_detailed_style_has_aggregate_citation() {
        let long = "word ".repeat(60);
        let result = PersonalityAnalyzer.analyze(&[post(&long)]);
        assert_eq!(scalar(&result, "communication_style"), Some("Detailed and expressive"));
        assert_eq!(result.citations.len(), 1);
        let c = &result.citations[0];
        assert_eq!(c.source_kind, SourceKind::Aggregate);
        assert_eq!(c.evidence, "Average 60.0 words per post");
    }

    #[test]
    fn test_short_items_omit_style() {
        let result = PersonalityAnalyzer.analyze(&[post("short one")]);
        assert!(!result.analysis.contains_key("communication_style"));
        assert!(result.citations.is_empty());
    }

    #[test]
    fn test_sentiment_labels() {
        let positive = PersonalityAnalyzer.analyze(&[post("awesome and amazing")]);
        assert_eq!(scalar(&positive, "sentiment"), Some("Generally positive and optimistic"));

        let critical = PersonalityAnalyzer.analyze(&[post("terrible and awful")]);
        assert_eq!(scalar(&critical, "sentiment"), Some("More critical or analytical"));

        let neutral = PersonalityAnalyzer.analyze(&[post("the sky")]);
        assert_eq!(scalar(&neutral, "sentiment"), Some("Balanced emotional expression"));
    }

    #[test]
    fn test_inquisitive_threshold() {
        let asks = vec![post("why?"), post("ok"), post("fine")];
        let result = PersonalityAnalyzer.analyze(&asks);
        assert_eq!(scalar(&result, "engagement_style"), Some("Inquisitive and engaging"));

        let quiet = vec![post("why?"), post("ok"), post("fine"), post("sure")];
        let result = PersonalityAnalyzer.analyze(&quiet);
        assert!(!result.analysis.contains_key("engagement_style"));
    }
}
