//! Technical proficiency: distinct languages, web tech, tools and concepts mentioned.

use super::Analyzer;
use super::scorer::{CitationCap, KeywordScorer, MatchPolicy};
use crate::domain::taxonomy::TECHNICAL;
use crate::domain::{CategoryResult, Citation, ContentItem, Dimension, Finding, Findings};

const CITATION_TAG: &str = "technical_skills";
const SKILLS_PER_CATEGORY: usize = 5;

pub struct TechnicalAnalyzer;

impl Analyzer for TechnicalAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Technical
    }

    fn analyze(&self, items: &[ContentItem]) -> CategoryResult {
        let scorer =
            KeywordScorer::new(TECHNICAL, MatchPolicy::DistinctKeyword, CitationCap::Unlimited);
        let mut skills = Findings::new();
        let mut citations = Vec::new();

        for category in scorer.score(items) {
            for hit in category.cited() {
                citations.push(Citation::for_item(
                    CITATION_TAG,
                    format!("{}: {}", category.label, hit.keyword),
                    format!("Mentioned '{}' in discussion", hit.keyword),
                    hit.item,
                ));
            }
            if !category.is_empty() {
                let found: Vec<String> = category
                    .keywords()
                    .take(SKILLS_PER_CATEGORY)
                    .map(str::to_string)
                    .collect();
                skills.insert(category.label, Finding::List(found));
            }
        }

        CategoryResult::new(skills, citations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_support::post;

    #[test]
    fn test_python_deduplicated() {
        let items = vec![post("python scripts"), post("more python please")];
        let result = TechnicalAnalyzer.analyze(&items);
        let langs = result
            .analysis
            .get("programming_languages")
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(langs.iter().filter(|l| *l == "python").count(), 1);

        let python_cites: Vec<_> = result
            .citations
            .iter()
            .filter(|c| c.indicator == "programming_languages: python")
            .collect();
        assert_eq!(python_cites.len(), 1);
        assert_eq!(python_cites[0].source_url, items[0].source_url);
        assert_eq!(python_cites[0].evidence, "Mentioned 'python' in discussion");
        assert_eq!(python_cites[0].category, "technical_skills");
    }

    #[test]
    fn test_list_capped_but_every_skill_cited() {
        let items = vec![post("html css react angular vue django")];
        let result = TechnicalAnalyzer.analyze(&items);
        let web = result
            .analysis
            .get("web_technologies")
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(web, ["html", "css", "react", "angular", "vue"]);
        let web_cites = result
            .citations
            .iter()
            .filter(|c| c.indicator.starts_with("web_technologies"))
            .count();
        assert_eq!(web_cites, 6);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "javascript" also contains "java".
        let result = TechnicalAnalyzer.analyze(&[post("javascript")]);
        let langs = result
            .analysis
            .get("programming_languages")
            .and_then(Finding::as_list)
            .unwrap();
        assert_eq!(langs, ["javascript", "java"]);
    }
}
