//! Question bank loading.
//!
//! The input is a single JSON array of record objects. Raw records only live
//! for the duration of a load; callers keep the classified rows.

use std::path::Path;

use tracing::{info, instrument, warn};

use flashdeck_shared::{FlashdeckError, NormalizedRow, RawRecord, Result};

use crate::classify::classify_all;

/// Decode a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(json)
        .map_err(|e| FlashdeckError::parse(format!("invalid question bank: {e}")))
}

/// Read and decode the records in `path`.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| FlashdeckError::io(path, e))?;
    parse_records(&content).map_err(|e| match e {
        FlashdeckError::Parse { message } => {
            FlashdeckError::parse(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Load `path` and classify every record, in input order.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_rows(path: &Path) -> Result<Vec<NormalizedRow>> {
    let records = load_records(path)?;
    let rows = classify_all(&records);

    let unclassified = rows
        .iter()
        .filter(|r| r.institution.is_none() && r.category.is_none())
        .count();
    if unclassified > 0 {
        warn!(unclassified, "records matched no known institution or category");
    }

    info!(rows = rows.len(), "question bank loaded");
    Ok(rows)
}
