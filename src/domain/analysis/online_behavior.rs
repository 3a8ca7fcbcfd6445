//! Online behavior: posting vs commenting balance and how content is received.

use super::{mean_score, Analyzer};
use crate::domain::{CategoryResult, ContentItem, ContentKind, Dimension, Finding, Findings};

pub struct OnlineBehaviorAnalyzer;

impl Analyzer for OnlineBehaviorAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::OnlineBehavior
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        if items.is_empty() {
            return CategoryResult::empty();
        }

        let posts = items.iter().filter(|i| i.kind == ContentKind::Post).count();
        let comments = items.iter().filter(|i| i.kind == ContentKind::Comment).count();

        let engagement = if comments > posts * 3 {
            "More of a commenter than original poster"
        } else if posts > comments {
            "Prefers creating original content"
        } else {
            "Balanced between posting and commenting"
        };

        let avg = mean_score(items);
        let reception = if avg > 10.0 {
            "Generally well-received content"
        } else if avg > 1.0 {
            "Moderately engaging content"
        } else {
            "Niche or less popular content"
        };

        let mut analysis = Findings::new();
        analysis.insert("engagement_style", Finding::scalar(engagement));
        analysis.insert("content_reception", Finding::scalar(reception));
        CategoryResult::new(analysis, Vec::new())
    }
}
