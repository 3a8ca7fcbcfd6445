//! Demographics: age-group and location indicators.
//!
//! Age buckets are first-match-wins per item and bucket; every location token
//! contained in an item counts. Citations are emitted item by item.

use super::scorer::{CitationCap, KeywordScorer, MatchPolicy};
use super::Analyzer;
use crate::domain::taxonomy::{AGE_GROUPS, LOCATIONS};
use crate::domain::{CategoryResult, Citation, ContentItem, Dimension, Finding, Findings};
use std::slice;

const CITATION_TAG: &str = "demographics";

pub struct DemographicsAnalyzer;

impl Analyzer for DemographicsAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Demographics
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        let ages = KeywordScorer::new(AGE_GROUPS, MatchPolicy::FirstPerItem, CitationCap::Unlimited);
        let places = KeywordScorer::new(LOCATIONS, MatchPolicy::FirstPerItem, CitationCap::Unlimited);

        let mut age_indicators = Vec::new();
        let mut location_indicators = Vec::new();
        let mut citations = Vec::new();

        for item in items {
            let single = slice::from_ref(item);

            for bucket in ages.score(single) {
                for hit in bucket.cited() {
                    age_indicators.push(format!(
                        "Likely {} based on '{}' usage",
                        bucket.label, hit.keyword
                    ));
                    citations.push(Citation::for_item(
                        CITATION_TAG,
                        format!("Age group: {}", bucket.label),
                        hit.keyword,
                        item,
                    ));
                }
            }

            for place in places.score(single).into_iter().filter(|p| !p.is_empty()) {
                location_indicators.push(format!("Possible location: {}", place.label));
                citations.push(Citation::for_item(
                    CITATION_TAG,
                    format!("Location: {}", place.label),
                    format!("Mentioned '{}'", place.label),
                    item,
                ));
            }
        }

        let mut analysis = Findings::new();
        if !age_indicators.is_empty() {
            analysis.insert("age_indicators", Finding::List(age_indicators));
        }
        if !location_indicators.is_empty() {
            analysis.insert("location_indicators", Finding::List(location_indicators));
        }
        CategoryResult::new(analysis, citations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_support::post;
    use crate::domain::SourceKind;

    #[test]
    fn test_job_in_texas() {
        let items = vec![post("I love my new job in Texas")];
        let result = DemographicsAnalyzer.analyze(&items);

        let ages = result.analysis.get("age_indicators").and_then(Finding::as_list).unwrap();
        assert_eq!(ages, ["Likely adult based on 'job' usage"]);
        let places = result
            .analysis
            .get("location_indicators")
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(places, ["Possible location: Texas"]);

        assert_eq!(result.citations.len(), 2);
        assert_eq!(result.citations[0].indicator, "Age group: adult");
        assert_eq!(result.citations[0].evidence, "job");
        assert_eq!(result.citations[1].indicator, "Location: Texas");
        assert_eq!(result.citations[1].evidence, "Mentioned 'Texas'");
        for c in &result.citations {
            assert_eq!(c.source_url, items[0].source_url);
            assert_eq!(c.source_kind, SourceKind::Post);
            assert_eq!(c.category, "demographics");
        }
    }

    #[test]
    fn test_age_bucket_first_match_wins() {
        // "work" and "career" both sit in the adult bucket: one indicator only.
        let result = DemographicsAnalyzer.analyze(&[post("work on my career")]);
        let ages = result.analysis.get("age_indicators").and_then(Finding::as_list).unwrap();
        assert_eq!(ages, ["Likely adult based on 'work' usage"]);
    }

    #[test]
    fn test_multiple_buckets_and_locations_per_item() {
        let result =
            DemographicsAnalyzer.analyze(&[post("student near retirement, London to Toronto")]);
        let ages = result.analysis.get("age_indicators").and_then(Finding::as_list).unwrap();
        assert_eq!(ages.len(), 2);
        let places = result
            .analysis
            .get("location_indicators")
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(places, ["Possible location: London", "Possible location: Toronto"]);
        assert_eq!(result.citations.len(), 4);
    }

    #[test]
    fn test_citations_are_item_major() {
        let items = vec![post("college in Canada"), post("pension")];
        let result = DemographicsAnalyzer.analyze(&items);
        let indicators: Vec<&str> = result.citations.iter().map(|c| c.indicator.as_str()).collect();
        assert_eq!(
            indicators,
            vec!["Age group: young", "Location: Canada", "Age group: senior"]
        );
    }

    #[test]
    fn test_no_matches_gives_empty_analysis() {
        let result = DemographicsAnalyzer.analyze(&[post("hello there")]);
        assert!(result.analysis.is_empty());
        assert!(result.citations.is_empty());
    }
}
