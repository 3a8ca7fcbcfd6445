//! Plain-text persona report. Output depends only on the arguments, so identical
//! inputs (timestamp included) render byte-identical reports.

use crate::domain::{Dimension, EvidenceLedger, Finding, Findings, PersonaRecord};
use chrono::NaiveDateTime;

const RULE_WIDTH: usize = 65;
const CITATION_RULE_WIDTH: usize = 50;
const LIST_LIMIT: usize = 5;
const CITATIONS_PER_GROUP: usize = 10;
const MOST_ACTIVE_KEY: &str = "most_active_subreddits";

/// Fixed indents of the report's banner titles. The layout is hand-aligned, not centred.
const BANNER_INDENTS: [(&str, usize); 12] = [
    ("REDDIT USER PERSONA ANALYSIS", 20),
    ("USER OVERVIEW", 26),
    ("DEMOGRAPHICS", 25),
    ("INTERESTS & HOBBIES", 22),
    ("PERSONALITY TRAITS", 23),
    ("COMMUNICATION STYLE", 21),
    ("LIFESTYLE PREFERENCES", 20),
    ("VALUES & BELIEFS", 24),
    ("ONLINE BEHAVIOR", 23),
    ("TECHNICAL PROFICIENCY", 20),
    ("CITATIONS & EVIDENCE", 22),
    ("DISCLAIMER", 25),
];

pub const NO_PATTERNS: &str = "No significant patterns detected in this category.";
pub const NO_OVERVIEW: &str = "No overview data available.";
pub const NO_CITATIONS: &str = "No citations available.";

pub const DISCLAIMER: &str = "\
This persona is generated based on publicly available Reddit posts
and comments. It represents patterns and inferences from digital
behavior and may not fully represent the individual's complete
personality or circumstances.

Analysis conducted using automated text analysis methods.";

/// Render the full report.
pub fn render(
    record: &PersonaRecord,
    ledger: &EvidenceLedger,
    profile_identifier: &str,
    display_name: &str,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push('\n');
    push_banner(&mut out, "REDDIT USER PERSONA ANALYSIS");
    out.push_str(&format!(
        "Generated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Profile URL: {}\n", profile_identifier));
    out.push_str(&format!("Username: {}\n\n", display_name));

    for (dimension, result) in record.iter() {
        let body = match dimension {
            Dimension::Overview => format_overview(&result.analysis),
            _ => format_section(&result.analysis),
        };
        push_section(&mut out, dimension.title(), &body);
    }
    push_section(&mut out, "CITATIONS & EVIDENCE", &format_citations(ledger));

    push_banner(&mut out, "DISCLAIMER");
    out.push_str(DISCLAIMER);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

fn push_banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let pad = banner_indent(title);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&" ".repeat(pad));
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
}

/// Indent for a banner title; unknown titles are centred on the rule.
fn banner_indent(title: &str) -> usize {
    BANNER_INDENTS
        .iter()
        .find(|(t, _)| *t == title)
        .map_or_else(|| RULE_WIDTH.saturating_sub(title.len()) / 2, |(_, pad)| *pad)
}

fn push_section(out: &mut String, title: &str, body: &str) {
    push_banner(out, title);
    out.push_str(body);
    out.push_str("\n\n");
}

/// `snake_case` key to `Title Case`: a letter is upper-cased when the previous
/// character is not a letter, lower-cased otherwise.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;
    for c in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn format_overview(overview: &Findings) -> String {
    if overview.is_empty() {
        return NO_OVERVIEW.to_string();
    }
    let mut text = String::new();
    for (key, value) in overview.iter() {
        match value {
            Finding::List(subs) if key == MOST_ACTIVE_KEY => {
                let top: Vec<&str> = subs.iter().take(LIST_LIMIT).map(String::as_str).collect();
                text.push_str(&format!("{}: {}\n", title_case(key), top.join(", ")));
            }
            _ => text.push_str(&format!("{}: {}\n", title_case(key), value)),
        }
    }
    text
}

fn format_section(analysis: &Findings) -> String {
    if analysis.is_empty() {
        return NO_PATTERNS.to_string();
    }
    let mut text = String::new();
    for (category, details) in analysis.iter() {
        let name = title_case(category);
        match details {
            Finding::Attributes(attrs) => {
                text.push_str(&format!("\n{}:\n", name));
                for (key, value) in attrs.iter() {
                    text.push_str(&format!("  • {}: {}\n", title_case(key), value));
                }
            }
            Finding::List(items) => {
                text.push_str(&format!("\n{}:\n", name));
                for item in items.iter().take(LIST_LIMIT) {
                    text.push_str(&format!("  • {}\n", item));
                }
            }
            Finding::Scalar(value) => {
                text.push_str(&format!("\n{}: {}\n", name, value));
            }
        }
    }
    text
}

fn format_citations(ledger: &EvidenceLedger) -> String {
    if ledger.is_empty() {
        return NO_CITATIONS.to_string();
    }
    let mut text = String::new();
    for (category, citations) in ledger.grouped() {
        text.push_str(&format!("\n{} EVIDENCE:\n", category.to_uppercase()));
        text.push_str(&"-".repeat(CITATION_RULE_WIDTH));
        text.push('\n');

        for (i, citation) in citations.iter().take(CITATIONS_PER_GROUP).enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, citation.indicator));
            text.push_str(&format!("   Evidence: {}\n", citation.evidence));
            text.push_str(&format!("   Source: {}\n", citation.source_url));
            text.push_str(&format!("   Type: {}\n\n", citation.source_kind));
        }
    }
    text
}
