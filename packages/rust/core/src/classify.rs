//! Tag classification: raw records in, normalized rows out.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use flashdeck_shared::{NormalizedRow, RawRecord, TECHNICAL_SOURCE};

use crate::labels::{category_label, institution_label};
use crate::normalize::normalize_text;

/// Labels recovered from one record's tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagClassification {
    pub institution: Option<&'static str>,
    pub category: Option<&'static str>,
}

/// Pick the first institution tag and, independently, the first category tag.
///
/// Later tags from the same set are ignored. Tags in neither set are dropped.
pub fn classify_tags<S: AsRef<str>>(tags: &[S]) -> TagClassification {
    TagClassification {
        institution: tags.iter().find_map(|t| institution_label(t.as_ref())),
        category: tags.iter().find_map(|t| category_label(t.as_ref())),
    }
}

/// Project a raw record into a [`NormalizedRow`].
pub fn classify_record(record: &RawRecord) -> NormalizedRow {
    let labels = classify_tags(record.tags());

    NormalizedRow {
        id: record.question_number.clone(),
        question_text: normalize_text(record.question.as_deref()),
        institution: labels.institution.map(String::from),
        category: labels.category.map(String::from),
        answer_text: normalize_text(record.answer.as_deref()),
        source_tag: TECHNICAL_SOURCE.to_string(),
    }
}

/// Classify a whole collection, preserving order.
#[instrument(skip_all, fields(records = records.len()))]
pub fn classify_all(records: &[RawRecord]) -> Vec<NormalizedRow> {
    let rows: Vec<NormalizedRow> = records.iter().map(classify_record).collect();
    debug!(rows = rows.len(), "classification complete");
    rows
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Per-label counts over a classified collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_institution: BTreeMap<String, usize>,
    /// Rows with neither label.
    pub unclassified: usize,
}

impl ClassificationSummary {
    pub fn from_rows(rows: &[NormalizedRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };

        for row in rows {
            if let Some(category) = &row.category {
                *summary.by_category.entry(category.clone()).or_default() += 1;
            }
            if let Some(institution) = &row.institution {
                *summary.by_institution.entry(institution.clone()).or_default() += 1;
            }
            if row.category.is_none() && row.institution.is_none() {
                summary.unclassified += 1;
            }
        }

        summary
    }
}
