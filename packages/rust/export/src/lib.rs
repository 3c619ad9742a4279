//! Document export for classified question banks.
//!
//! Rows are laid out through the [`DocumentSink`] trait, so the layout logic
//! never depends on a concrete file format. Two backends ship with the crate:
//! Markdown (always) and Word via `docx-rs` (behind the `docx` feature).

#[cfg(feature = "docx")]
pub mod docx;
pub mod exporter;
pub mod lines;
pub mod markdown;
pub mod sink;

pub use exporter::{
    ExportOptions, ExportProgress, ExportedDocument, SilentProgress, distinct_values,
    export_by_category, export_by_field, export_by_institution, export_document,
    render_document, safe_filename,
};
pub use lines::{AnswerLine, LineKind, classify_answer_lines};
pub use markdown::{MarkdownBackend, MarkdownDocument};
pub use sink::{DocumentBackend, DocumentSink, backend_for};
