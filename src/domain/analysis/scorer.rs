//! Generic keyword scorer. Scans items against a taxonomy under a match policy
//! and bounds how many hits per category become citations.

use crate::domain::ContentItem;
use crate::domain::taxonomy::Taxonomy;

/// How keyword hits are counted within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Every keyword contained in every item is one hit.
    EveryMention,
    /// At most one hit per item; the first keyword in table order wins.
    FirstPerItem,
    /// Each keyword counts once across all items, at its first occurrence.
    DistinctKeyword,
}

/// Upper bound on citations emitted per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationCap {
    Unlimited,
    First(usize),
}

impl CitationCap {
    fn limit(self) -> usize {
        match self {
            CitationCap::Unlimited => usize::MAX,
            CitationCap::First(n) => n,
        }
    }
}

/// One keyword found in one item.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub item: &'a ContentItem,
    pub keyword: &'static str,
}

/// Hits for one taxonomy category, in discovery order.
#[derive(Debug, Clone)]
pub struct CategoryScore<'a> {
    pub label: &'static str,
    pub hits: Vec<Hit<'a>>,
    cap: CitationCap,
}

impl<'a> CategoryScore<'a> {
    pub fn count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Hits that fall within the citation cap.
    pub fn cited(&self) -> impl Iterator<Item = &Hit<'a>> {
        self.hits.iter().take(self.cap.limit())
    }

    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hits.iter().map(|h| h.keyword)
    }
}

/// Keyword scan parameterized by taxonomy, policy and citation cap.
#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer {
    taxonomy: Taxonomy,
    policy: MatchPolicy,
    cap: CitationCap,
}

impl KeywordScorer {
    /// # Panics
    /// If `cap` is `First(0)`.
    pub fn new(taxonomy: Taxonomy, policy: MatchPolicy, cap: CitationCap) -> Self {
        assert!(
            cap != CitationCap::First(0),
            "citation cap for taxonomy {} must be positive",
            taxonomy.name
        );
        Self {
            taxonomy,
            policy,
            cap,
        }
    }

    /// Score every category of the taxonomy, in table order. Categories without hits
    /// are still returned so callers can decide on inclusion.
    pub fn score<'a>(&self, items: &'a [ContentItem]) -> Vec<CategoryScore<'a>> {
        let lowered: Vec<String> = items.iter().map(ContentItem::content_lower).collect();
        self.taxonomy
            .categories
            .iter()
            .map(|&(label, keywords)| CategoryScore {
                label,
                hits: self.scan(items, &lowered, keywords),
                cap: self.cap,
            })
            .collect()
    }

    fn scan<'a>(
        &self,
        items: &'a [ContentItem],
        lowered: &[String],
        keywords: &'static [&'static str],
    ) -> Vec<Hit<'a>> {
        let mut hits = Vec::new();
        for (item, text) in items.iter().zip(lowered) {
            let mut found = matching_keywords(keywords, text);
            match self.policy {
                MatchPolicy::EveryMention => {
                    hits.extend(found.map(|keyword| Hit { item, keyword }));
                }
                MatchPolicy::FirstPerItem => {
                    if let Some(keyword) = found.next() {
                        hits.push(Hit { item, keyword });
                    }
                }
                MatchPolicy::DistinctKeyword => {
                    for keyword in found {
                        if !hits.iter().any(|h: &Hit<'_>| h.keyword == keyword) {
                            hits.push(Hit { item, keyword });
                        }
                    }
                }
            }
        }
        hits
    }
}

/// Keywords contained (as substrings) in an already lower-cased haystack, in table order.
pub fn matching_keywords<'k>(
    keywords: &'k [&'static str],
    haystack_lower: &'k str,
) -> impl Iterator<Item = &'static str> + 'k {
    keywords
        .iter()
        .copied()
        .filter(move |kw| haystack_lower.contains(kw))
}

/// Total non-overlapping occurrences of every needle in the haystack.
pub fn count_occurrences(haystack_lower: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .map(|needle| haystack_lower.matches(needle).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::{LIFESTYLE, TECHNICAL};

    fn item(content: &str, url: &str) -> ContentItem {
        ContentItem {
            content: content.to_string(),
            source_url: url.to_string(),
            ..ContentItem::default()
        }
    }

    #[test]
    fn test_every_mention_counts_each_keyword() {
        let items = vec![item("Gym then a WORKOUT and running", "a")];
        let scorer = KeywordScorer::new(LIFESTYLE, MatchPolicy::EveryMention, CitationCap::First(2));
        let scores = scorer.score(&items);
        let fitness = &scores[0];
        assert_eq!(fitness.label, "fitness_oriented");
        assert_eq!(fitness.count(), 3);
        assert_eq!(fitness.cited().count(), 2);
    }

    #[test]
    fn test_first_per_item_stops_at_first_keyword() {
        let items = vec![item("gym workout", "a"), item("running", "b"), item("nothing", "c")];
        let scorer = KeywordScorer::new(LIFESTYLE, MatchPolicy::FirstPerItem, CitationCap::Unlimited);
        let fitness = &scorer.score(&items)[0];
        let kws: Vec<_> = fitness.keywords().collect();
        assert_eq!(kws, vec!["gym", "running"]);
    }

    #[test]
    fn test_distinct_keyword_dedups_across_items() {
        let items = vec![item("python rocks", "a"), item("more python", "b")];
        let scorer =
            KeywordScorer::new(TECHNICAL, MatchPolicy::DistinctKeyword, CitationCap::Unlimited);
        let langs = &scorer.score(&items)[0];
        assert_eq!(langs.count(), 1);
        assert_eq!(langs.hits[0].item.source_url, "a");
    }

    #[test]
    fn test_empty_items_yield_empty_scores() {
        let scorer = KeywordScorer::new(LIFESTYLE, MatchPolicy::EveryMention, CitationCap::First(3));
        let scores = scorer.score(&[]);
        assert_eq!(scores.len(), LIFESTYLE.categories.len());
        assert!(scores.iter().all(CategoryScore::is_empty));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_cap_is_rejected() {
        KeywordScorer::new(LIFESTYLE, MatchPolicy::EveryMention, CitationCap::First(0));
    }

    #[test]
    fn test_count_occurrences_is_substring_based() {
        assert_eq!(count_occurrences("i like likes and unlike", &["like"]), 3);
        assert_eq!(count_occurrences("aaaa", &["aa"]), 2);
    }
}
