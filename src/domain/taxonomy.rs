//! Static keyword taxonomies. Pure data, read-only for the life of the process.
//!
//! Keywords are lower-case; matching lower-cases the haystack instead.

/// Category label paired with its trigger keywords, in match priority order.
pub type TaxonomyEntry = (&'static str, &'static [&'static str]);

/// One table: ordered categories for a single analysis need.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    pub name: &'static str,
    pub categories: &'static [TaxonomyEntry],
}

impl Taxonomy {
    pub const fn new(name: &'static str, categories: &'static [TaxonomyEntry]) -> Self {
        Self { name, categories }
    }

    pub fn keywords(&self, category: &str) -> Option<&'static [&'static str]> {
        self.categories
            .iter()
            .find(|(label, _)| *label == category)
            .map(|(_, kws)| *kws)
    }
}

pub const AGE_GROUPS: Taxonomy = Taxonomy::new(
    "age_groups",
    &[
        (
            "young",
            &["college", "university", "student", "freshman", "sophomore"],
        ),
        (
            "adult",
            &["job", "work", "career", "mortgage", "marriage", "kids"],
        ),
        ("senior", &["retirement", "grandkids", "pension"]),
    ],
);

/// One category per place; labels keep display casing.
pub const LOCATIONS: Taxonomy = Taxonomy::new(
    "locations",
    &[
        ("USA", &["usa"]),
        ("Canada", &["canada"]),
        ("UK", &["uk"]),
        ("Australia", &["australia"]),
        ("Germany", &["germany"]),
        ("France", &["france"]),
        ("California", &["california"]),
        ("Texas", &["texas"]),
        ("New York", &["new york"]),
        ("London", &["london"]),
        ("Toronto", &["toronto"]),
    ],
);

/// Matched against subreddit names, not content.
pub const INTERESTS: Taxonomy = Taxonomy::new(
    "interests",
    &[
        (
            "technology",
            &["programming", "tech", "software", "coding", "python", "javascript"],
        ),
        (
            "gaming",
            &["gaming", "games", "xbox", "playstation", "nintendo", "steam"],
        ),
        (
            "fitness",
            &["fitness", "gym", "workout", "running", "bodybuilding"],
        ),
        (
            "finance",
            &["investing", "stocks", "crypto", "bitcoin", "finance", "money"],
        ),
        (
            "entertainment",
            &["movies", "tv", "netflix", "music", "books", "reading"],
        ),
        (
            "lifestyle",
            &["cooking", "food", "travel", "photography", "art"],
        ),
    ],
);

pub const SENTIMENT: Taxonomy = Taxonomy::new(
    "sentiment",
    &[
        (
            "positive",
            &["good", "great", "awesome", "love", "like", "amazing", "excellent"],
        ),
        (
            "negative",
            &["bad", "hate", "terrible", "awful", "stupid", "annoying"],
        ),
    ],
);

pub const REGISTER: Taxonomy = Taxonomy::new(
    "register",
    &[
        (
            "formal",
            &["furthermore", "however", "therefore", "consequently"],
        ),
        ("informal", &["lol", "omg", "wtf", "tbh", "imo"]),
    ],
);

pub const LIFESTYLE: Taxonomy = Taxonomy::new(
    "lifestyle",
    &[
        (
            "fitness_oriented",
            &["gym", "workout", "exercise", "running", "fitness"],
        ),
        // "cooking" is listed twice and scores twice per mention.
        (
            "food_enthusiast",
            &["cooking", "recipe", "restaurant", "food", "cooking"],
        ),
        ("traveler", &["travel", "trip", "vacation", "country", "city"]),
        ("homebody", &["home", "netflix", "cozy", "indoor"]),
    ],
);

pub const VALUES: Taxonomy = Taxonomy::new(
    "values",
    &[
        (
            "privacy_conscious",
            &["privacy", "data", "surveillance", "tracking"],
        ),
        (
            "environmentally_conscious",
            &["environment", "climate", "sustainability", "green"],
        ),
        (
            "community_oriented",
            &["community", "help", "volunteer", "support"],
        ),
        (
            "technology_enthusiast",
            &["innovation", "technology", "future", "automation"],
        ),
    ],
);

pub const TECHNICAL: Taxonomy = Taxonomy::new(
    "technical",
    &[
        (
            "programming_languages",
            &["python", "javascript", "java", "c++", "php", "ruby", "go", "rust"],
        ),
        (
            "web_technologies",
            &["html", "css", "react", "angular", "vue", "node.js", "django"],
        ),
        (
            "tools_platforms",
            &["git", "docker", "aws", "linux", "mysql", "mongodb"],
        ),
        (
            "concepts",
            &["algorithm", "database", "api", "machine learning", "ai", "blockchain"],
        ),
    ],
);

pub const ALL: [Taxonomy; 8] = [
    AGE_GROUPS, LOCATIONS, INTERESTS, SENTIMENT, REGISTER, LIFESTYLE, VALUES, TECHNICAL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_lowercase() {
        for table in ALL {
            for (label, kws) in table.categories {
                for kw in *kws {
                    assert_eq!(*kw, kw.to_lowercase(), "{}/{label}: {kw}", table.name);
                    assert!(!kw.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_keywords_within_category() {
        for table in ALL {
            for (label, kws) in table.categories {
                let unique: HashSet<_> = kws.iter().collect();
                let expected = match (table.name, *label) {
                    ("lifestyle", "food_enthusiast") => kws.len() - 1,
                    _ => kws.len(),
                };
                assert_eq!(unique.len(), expected, "{}/{label}", table.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(AGE_GROUPS.keywords("senior").map(|k| k.len()), Some(3));
        assert!(AGE_GROUPS.keywords("toddler").is_none());
        let labels: Vec<_> = TECHNICAL.categories.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "programming_languages",
                "web_technologies",
                "tools_platforms",
                "concepts"
            ]
        );
    }
}
