//! Interests: subreddit participation mapped onto interest categories.

use super::Analyzer;
use super::scorer::matching_keywords;
use crate::domain::taxonomy::INTERESTS;
use crate::domain::{CategoryResult, Citation, ContentItem, Dimension, Finding, Findings};

const CITATION_TAG: &str = "interests";
/// Items cited per matching (community, keyword) pair.
const CITED_ITEMS_PER_COMMUNITY: usize = 3;
const EVIDENCE_LIMIT: usize = 5;

/// Interest strength for a category score.
pub fn strength(score: usize) -> &'static str {
    if score > 10 {
        "High"
    } else if score > 3 {
        "Medium"
    } else {
        "Low"
    }
}

pub struct InterestsAnalyzer;

impl Analyzer for InterestsAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Interests
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        let communities = community_counts(items);
        let mut analysis = Findings::new();
        let mut citations = Vec::new();

        for &(category, keywords) in INTERESTS.categories {
            let mut score = 0usize;
            let mut evidence = Vec::new();

            for (community, count) in &communities {
                for _keyword in matching_keywords(keywords, community) {
                    score += count;
                    evidence.push(format!("r/{community} ({count} posts)"));

                    let members = items
                        .iter()
                        .filter(|i| i.community.to_lowercase() == *community)
                        .take(CITED_ITEMS_PER_COMMUNITY);
                    for item in members {
                        citations.push(Citation::for_item(
                            CITATION_TAG,
                            format!("Interest in {category}"),
                            format!("Active in r/{community}"),
                            item,
                        ));
                    }
                }
            }

            if score > 0 {
                evidence.truncate(EVIDENCE_LIMIT);
                let mut attrs = Findings::new();
                attrs.insert("strength", Finding::scalar(strength(score)));
                attrs.insert("evidence", Finding::List(evidence));
                analysis.insert(category, Finding::Attributes(attrs));
            }
        }

        CategoryResult::new(analysis, citations)
    }
}

/// Item count per lower-cased community, in first-seen order. Empty communities are skipped.
fn community_counts(items: &[ContentItem]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items.iter().filter(|i| !i.community.is_empty()) {
        let name = item.community.to_lowercase();
        match counts.iter_mut().find(|(c, _)| *c == name) {
            Some((_, n)) => *n += 1,
            None => counts.push((name, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;
    use crate::domain::analysis::test_support::item;

    fn in_community(community: &str, n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| item(ContentKind::Post, &"x".repeat(i + 1), community, 1))
            .collect()
    }

    fn strength_of(result: &CategoryResult, category: &str) -> Option<String> {
        result
            .analysis
            .get(category)
            .and_then(Finding::as_attributes)
            .and_then(|a| a.get("strength"))
            .and_then(Finding::as_scalar)
            .map(str::to_string)
    }

    #[test]
    fn test_ten_programming_items_is_medium() {
        let items = in_community("programming", 10);
        let result = InterestsAnalyzer.analyze(&items);
        assert_eq!(strength_of(&result, "technology").as_deref(), Some("Medium"));
        let evidence = result
            .analysis
            .get("technology")
            .and_then(Finding::as_attributes)
            .and_then(|a| a.get("evidence"))
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(evidence, ["r/programming (10 posts)"]);
        // Three items cited for the single matching keyword.
        assert_eq!(result.citations.len(), 3);
        assert_eq!(result.citations[0].indicator, "Interest in technology");
        assert_eq!(result.citations[0].evidence, "Active in r/programming");
    }

    #[test]
    fn test_strength_is_monotonic() {
        let mut last = 0;
        let rank = |s: &str| match s {
            "Low" => 0,
            "Medium" => 1,
            _ => 2,
        };
        for n in 1..=15 {
            let result = InterestsAnalyzer.analyze(&in_community("gaming", n));
            let label = strength_of(&result, "gaming").unwrap();
            let expected = if n > 10 { "High" } else if n > 3 { "Medium" } else { "Low" };
            assert_eq!(label, expected, "n = {n}");
            assert!(rank(&label) >= last);
            last = rank(&label);
        }
    }

    #[test]
    fn test_community_matching_several_keywords_counts_each() {
        // "pythonprogramming" contains both "programming" and "python".
        let result = InterestsAnalyzer.analyze(&in_community("PythonProgramming", 2));
        assert_eq!(strength_of(&result, "technology").as_deref(), Some("Medium"));
        assert_eq!(result.citations.len(), 4);
    }

    #[test]
    fn test_unmatched_communities_are_absent() {
        let result = InterestsAnalyzer.analyze(&in_community("askhistorians", 4));
        assert!(result.analysis.is_empty());
        assert!(result.citations.is_empty());
    }

    #[test]
    fn test_evidence_capped_at_five() {
        let mut items = Vec::new();
        for sub in ["pcgaming", "xbox", "nintendo", "steam", "gamingnews", "retrogames"] {
            items.extend(in_community(sub, 1));
        }
        let result = InterestsAnalyzer.analyze(&items);
        let evidence = result
            .analysis
            .get("gaming")
            .and_then(Finding::as_attributes)
            .and_then(|a| a.get("evidence"))
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(evidence.len(), 5);
    }
}
