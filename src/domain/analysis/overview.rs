//! Overview: activity counts, mean score and most active subreddits.

use super::{mean_score, Analyzer};
use crate::domain::{CategoryResult, ContentItem, ContentKind, Dimension, Finding, Findings};

pub const LIMITED_DATA_SUMMARY: &str = "Limited data available for analysis";

const TOP_COMMUNITIES: usize = 5;

/// Overview for one user. Holds the username because it is the only analyzer reading user info.
#[derive(Debug, Clone, Default)]
pub struct OverviewAnalyzer {
    username: Option<String>,
}

impl OverviewAnalyzer {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }
}

impl Analyzer for OverviewAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Overview
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        let mut analysis = Findings::new();
        if items.is_empty() {
            analysis.insert("summary", Finding::scalar(LIMITED_DATA_SUMMARY));
            return CategoryResult::new(analysis, Vec::new());
        }

        let posts = count_kind(items, ContentKind::Post);
        let comments = count_kind(items, ContentKind::Comment);

        analysis.insert(
            "username",
            Finding::scalar(self.username.as_deref().unwrap_or("Unknown")),
        );
        analysis.insert("total_posts", Finding::scalar(posts));
        analysis.insert("total_comments", Finding::scalar(comments));
        analysis.insert(
            "average_score",
            Finding::Scalar(format_score(mean_score(items))),
        );
        analysis.insert(
            "most_active_subreddits",
            Finding::List(top_communities(items, TOP_COMMUNITIES)),
        );
        analysis.insert(
            "activity_summary",
            Finding::Scalar(format!(
                "Active user with {posts} posts and {comments} comments"
            )),
        );
        CategoryResult::new(analysis, Vec::new())
    }
}

fn count_kind(items: &[ContentItem], kind: ContentKind) -> usize {
    items.iter().filter(|i| i.kind == kind).count()
}

/// Non-empty communities by descending item count. Ties keep first-seen order (stable sort).
pub fn top_communities(items: &[ContentItem], limit: usize) -> Vec<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for item in items.iter().filter(|i| !i.community.is_empty()) {
        match tally.iter_mut().find(|(name, _)| *name == item.community) {
            Some((_, n)) => *n += 1,
            None => tally.push((item.community.as_str(), 1)),
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Two-decimal rounding with ties to even (`0.125` → `0.12`); whole numbers keep
/// one decimal place (`5.0`).
fn format_score(mean: f64) -> String {
    let rounded = (mean * 100.0).round_ties_even() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}
