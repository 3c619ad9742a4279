//! Document layout and batch export.
//!
//! Every document has the same shape:
//! ```text
//! Title
//! [Filtered by: <Label>=<value>]
//! Total Questions: N
//! ── per row ──
//! Question: ...
//! [Reported In: ...]
//! [Type: ...]
//! Answer:
//!   paragraphs / bullets
//! ──────────
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use flashdeck_shared::{DocumentConfig, NormalizedRow, Result, RowField, RowFilter};

use crate::lines::{LineKind, classify_answer_lines};
use crate::sink::{DocumentBackend, DocumentSink};

/// Width of the rule printed after each record.
const SEPARATOR_WIDTH: usize = 50;

/// Presentation options shared by every exported document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Title heading.
    pub title: String,
    /// Prefix of batch-exported file names.
    pub file_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&DocumentConfig::default())
    }
}

impl From<&DocumentConfig> for ExportOptions {
    fn from(config: &DocumentConfig) -> Self {
        Self {
            title: config.title.clone(),
            file_prefix: config.file_prefix.clone(),
        }
    }
}

/// One document written by an export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Field value this document was split on (batch exports only).
    pub key: Option<String>,
    pub path: PathBuf,
    /// Rows included after filtering.
    pub row_count: usize,
}

/// Progress callback for batch exports.
pub trait ExportProgress {
    /// Called once the number of documents is known.
    fn started(&self, total: usize);
    /// Called after each document is saved.
    fn document_written(&self, doc: &ExportedDocument, current: usize, total: usize);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ExportProgress for SilentProgress {
    fn started(&self, _total: usize) {}
    fn document_written(&self, _doc: &ExportedDocument, _current: usize, _total: usize) {}
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Lay out `rows` (restricted by `filter`) into `sink`. Returns the row count.
///
/// Does not save; callers decide where the document goes.
pub fn render_document(
    sink: &mut dyn DocumentSink,
    rows: &[NormalizedRow],
    filter: Option<&RowFilter>,
    title: &str,
) -> usize {
    let selected: Vec<&NormalizedRow> = rows
        .iter()
        .filter(|row| filter.is_none_or(|f| f.matches(row)))
        .collect();

    sink.add_heading(title, 0);
    if let Some(filter) = filter {
        sink.add_heading(&format!("Filtered by: {}", filter.describe()), 2);
    }

    sink.add_paragraph(None, &format!("Total Questions: {}", selected.len()));
    sink.add_paragraph(None, "");

    for row in &selected {
        render_row(sink, row);
    }

    selected.len()
}

fn render_row(sink: &mut dyn DocumentSink, row: &NormalizedRow) {
    sink.add_paragraph(Some("Question: "), &row.question_text);

    if let Some(institution) = row.institution.as_deref().filter(|s| !s.is_empty()) {
        sink.add_paragraph(Some("Reported In: "), institution);
    }
    if let Some(category) = row.category.as_deref().filter(|s| !s.is_empty()) {
        sink.add_paragraph(Some("Type: "), category);
    }

    sink.add_paragraph(Some("Answer:"), "");
    for line in classify_answer_lines(&row.answer_text) {
        match line.kind {
            LineKind::Bullet => sink.add_bullet_item(&line.text),
            LineKind::Normal => sink.add_paragraph(None, &line.text),
        }
    }

    sink.add_paragraph(None, &"─".repeat(SEPARATOR_WIDTH));
    sink.add_paragraph(None, "");
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Render one document and save it to `path`.
#[instrument(skip_all, fields(backend = backend.name(), path = %path.display()))]
pub fn export_document(
    backend: &dyn DocumentBackend,
    rows: &[NormalizedRow],
    filter: Option<&RowFilter>,
    options: &ExportOptions,
    path: &Path,
) -> Result<ExportedDocument> {
    let mut sink = backend.new_document();
    let row_count = render_document(sink.as_mut(), rows, filter, &options.title);
    sink.save(path)?;

    info!(row_count, "document exported");

    Ok(ExportedDocument {
        key: filter.map(|f| f.value.clone()),
        path: path.to_path_buf(),
        row_count,
    })
}

/// Write one document per distinct non-empty value of `field`.
///
/// Keys are taken in first-appearance order. The first failed document aborts
/// the batch; documents already written are left in place.
#[instrument(skip_all, fields(backend = backend.name(), field = %field, dir = %output_dir.display()))]
pub fn export_by_field(
    backend: &dyn DocumentBackend,
    rows: &[NormalizedRow],
    field: RowField,
    output_dir: &Path,
    options: &ExportOptions,
    progress: &dyn ExportProgress,
) -> Result<Vec<ExportedDocument>> {
    let keys = distinct_values(rows, field);
    progress.started(keys.len());
    info!(documents = keys.len(), "starting batch export");

    let mut written = Vec::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        let path = output_dir.join(format!(
            "{}{}.{}",
            options.file_prefix,
            safe_filename(key),
            backend.extension()
        ));
        let filter = RowFilter::new(field, *key);

        let doc = export_document(backend, rows, Some(&filter), options, &path)?;
        debug!(key, path = %doc.path.display(), rows = doc.row_count, "exported group");
        progress.document_written(&doc, i + 1, keys.len());
        written.push(doc);
    }

    Ok(written)
}

/// One document per category present in `rows`.
pub fn export_by_category(
    backend: &dyn DocumentBackend,
    rows: &[NormalizedRow],
    output_dir: &Path,
    options: &ExportOptions,
    progress: &dyn ExportProgress,
) -> Result<Vec<ExportedDocument>> {
    export_by_field(backend, rows, RowField::Category, output_dir, options, progress)
}

/// One document per institution present in `rows`.
pub fn export_by_institution(
    backend: &dyn DocumentBackend,
    rows: &[NormalizedRow],
    output_dir: &Path,
    options: &ExportOptions,
    progress: &dyn ExportProgress,
) -> Result<Vec<ExportedDocument>> {
    export_by_field(backend, rows, RowField::Institution, output_dir, options, progress)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Distinct non-empty values of `field`, in first-appearance order.
pub fn distinct_values(rows: &[NormalizedRow], field: RowField) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .map(|row| row.field_value(field))
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .collect()
}

/// Replace every character outside letters, digits, `_`, `-` and `.` with `_`.
pub fn safe_filename(key: &str) -> String {
    static UNSAFE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^\w.\-]").expect("valid regex"));

    UNSAFE_RE.replace_all(key, "_").into_owned()
}
