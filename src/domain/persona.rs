//! Persona record: per-dimension findings plus the flattened evidence ledger.

use crate::domain::Citation;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single finding value. Scalars render inline, attributes and lists as bulleted blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Finding {
    Scalar(String),
    Attributes(Findings),
    List(Vec<String>),
}

impl Finding {
    pub fn scalar(value: impl ToString) -> Self {
        Finding::Scalar(value.to_string())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Finding::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Finding::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_attributes(&self) -> Option<&Findings> {
        match self {
            Finding::Attributes(attrs) => Some(attrs),
            _ => None,
        }
    }
}

/// Nested values print on one line; lists are comma-joined.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Scalar(s) => f.write_str(s),
            Finding::List(items) => f.write_str(&items.join(", ")),
            Finding::Attributes(attrs) => {
                let parts: Vec<String> = attrs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

/// Insertion-ordered mapping from finding key to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    entries: Vec<(String, Finding)>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Finding) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Finding> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Findings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Output of one analysis dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryResult {
    pub analysis: Findings,
    /// Discovery order.
    pub citations: Vec<Citation>,
}

impl CategoryResult {
    pub fn new(analysis: Findings, citations: Vec<Citation>) -> Self {
        Self {
            analysis,
            citations,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// The fixed analysis dimensions, declared in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Overview,
    Demographics,
    Interests,
    Personality,
    Communication,
    Lifestyle,
    Values,
    OnlineBehavior,
    Technical,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Overview,
        Dimension::Demographics,
        Dimension::Interests,
        Dimension::Personality,
        Dimension::Communication,
        Dimension::Lifestyle,
        Dimension::Values,
        Dimension::OnlineBehavior,
        Dimension::Technical,
    ];

    /// Key under which the dimension appears in the persona record.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Overview => "user_overview",
            Dimension::Demographics => "demographics",
            Dimension::Interests => "interests_hobbies",
            Dimension::Personality => "personality_traits",
            Dimension::Communication => "communication_style",
            Dimension::Lifestyle => "lifestyle_preferences",
            Dimension::Values => "values_beliefs",
            Dimension::OnlineBehavior => "online_behavior",
            Dimension::Technical => "technical_proficiency",
        }
    }

    /// Report section heading.
    pub fn title(self) -> &'static str {
        match self {
            Dimension::Overview => "USER OVERVIEW",
            Dimension::Demographics => "DEMOGRAPHICS",
            Dimension::Interests => "INTERESTS & HOBBIES",
            Dimension::Personality => "PERSONALITY TRAITS",
            Dimension::Communication => "COMMUNICATION STYLE",
            Dimension::Lifestyle => "LIFESTYLE PREFERENCES",
            Dimension::Values => "VALUES & BELIEFS",
            Dimension::OnlineBehavior => "ONLINE BEHAVIOR",
            Dimension::Technical => "TECHNICAL PROFICIENCY",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Findings for every dimension of one user. Always holds all nine dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaRecord {
    results: BTreeMap<Dimension, CategoryResult>,
}

impl PersonaRecord {
    /// Build from per-dimension results.
    ///
    /// # Panics
    /// If any dimension is missing.
    pub fn from_results(results: impl IntoIterator<Item = (Dimension, CategoryResult)>) -> Self {
        let results: BTreeMap<_, _> = results.into_iter().collect();
        for dim in Dimension::ALL {
            assert!(
                results.contains_key(&dim),
                "persona record is missing dimension {dim}"
            );
        }
        Self { results }
    }

    pub fn get(&self, dimension: Dimension) -> &CategoryResult {
        &self.results[&dimension]
    }

    /// Results in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &CategoryResult)> {
        self.results.iter().map(|(d, r)| (*d, r))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Serialize for PersonaRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for (dim, result) in &self.results {
            map.serialize_entry(dim.key(), result)?;
        }
        map.end()
    }
}

/// Every citation of a persona record, concatenated in dimension order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvidenceLedger {
    citations: Vec<Citation>,
}

impl EvidenceLedger {
    pub fn from_record(record: &PersonaRecord) -> Self {
        let citations = record
            .iter()
            .flat_map(|(_, result)| result.citations.iter().cloned())
            .collect();
        Self { citations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Citation> {
        self.citations.iter()
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Citations grouped by category tag, groups in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Citation>)> {
        let mut groups: Vec<(&str, Vec<&Citation>)> = Vec::new();
        for citation in &self.citations {
            match groups.iter_mut().find(|(cat, _)| *cat == citation.category) {
                Some((_, members)) => members.push(citation),
                None => groups.push((citation.category.as_str(), vec![citation])),
            }
        }
        groups
    }
}
