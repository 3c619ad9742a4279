//! Tag-pattern report over a raw question bank.
//!
//! Used to audit which tags show up where before trusting the closed label
//! sets. Positions are reported even though classification ignores them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use flashdeck_shared::RawRecord;

/// Number of records echoed in the samples section.
const SAMPLE_COUNT: usize = 10;

const RULE_WIDTH: usize = 80;

/// Structure of the tags across a collection of records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagReport {
    pub record_count: usize,
    pub unique_tags: BTreeSet<String>,
    /// Tag-list length → number of records with that length.
    pub length_distribution: BTreeMap<usize, usize>,
    /// Position → distinct tags seen at that index.
    pub tags_by_position: BTreeMap<usize, BTreeSet<String>>,
    /// Distinct tags mentioning "reported in" (any case).
    pub reported_in_tags: BTreeSet<String>,
    /// Position-1 tags that do not mention "reported".
    pub position_one_types: BTreeSet<String>,
    pub position_two_types: BTreeSet<String>,
    /// Tag lists of the first few records.
    pub samples: Vec<Vec<String>>,
}

/// Build a [`TagReport`] for `records`.
pub fn analyze_tags(records: &[RawRecord]) -> TagReport {
    let mut report = TagReport {
        record_count: records.len(),
        ..TagReport::default()
    };

    for record in records {
        let tags = record.tags();
        *report.length_distribution.entry(tags.len()).or_default() += 1;

        for (position, tag) in tags.iter().enumerate() {
            report
                .tags_by_position
                .entry(position)
                .or_default()
                .insert(tag.clone());
            report.unique_tags.insert(tag.clone());
        }
    }

    report.reported_in_tags = report
        .unique_tags
        .iter()
        .filter(|t| t.to_lowercase().contains("reported in"))
        .cloned()
        .collect();

    if let Some(pos1) = report.tags_by_position.get(&1) {
        report.position_one_types = pos1
            .iter()
            .filter(|t| !t.to_lowercase().contains("reported"))
            .cloned()
            .collect();
    }
    if let Some(pos2) = report.tags_by_position.get(&2) {
        report.position_two_types = pos2.clone();
    }

    report.samples = records
        .iter()
        .take(SAMPLE_COUNT)
        .map(|r| r.tags().to_vec())
        .collect();

    report
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f)?;
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

impl fmt::Display for TagReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzing {} questions...", self.record_count)?;
        writeln!(f, "Total unique tags: {}", self.unique_tags.len())?;
        writeln!(f)?;
        writeln!(f, "Tag array length distribution:")?;
        for (length, count) in &self.length_distribution {
            writeln!(f, "  {length} tags: {count} questions")?;
        }

        banner(f, "TAGS BY POSITION")?;
        for (position, tags) in &self.tags_by_position {
            writeln!(f)?;
            writeln!(f, "POSITION {position} ({} unique values):", tags.len())?;
            writeln!(f, "{}", "-".repeat(50))?;
            for tag in tags {
                writeln!(f, "  {tag}")?;
            }
        }

        banner(f, "PATTERN ANALYSIS")?;
        writeln!(f)?;
        writeln!(f, "Tags containing 'Reported in': {}", self.reported_in_tags.len())?;
        for tag in &self.reported_in_tags {
            writeln!(f, "  {tag}")?;
        }
        writeln!(f)?;
        writeln!(f, "Potential Type categories (Position 1 tags that don't contain 'reported'):")?;
        for tag in &self.position_one_types {
            writeln!(f, "  {tag}")?;
        }
        writeln!(f)?;
        writeln!(f, "Potential Type categories (Position 2 tags):")?;
        for tag in &self.position_two_types {
            writeln!(f, "  {tag}")?;
        }

        banner(f, "SAMPLE TAG PATTERNS")?;
        for (i, tags) in self.samples.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Sample {}: {} tags", i + 1, tags.len())?;
            for (j, tag) in tags.iter().enumerate() {
                writeln!(f, "  [{j}] {tag}")?;
            }
        }

        Ok(())
    }
}
