//! Document sink trait and backend selection.
//!
//! The exporter only issues structural instructions (heading, paragraph,
//! bullet, save). Backends decide what those look like on disk.

use std::path::Path;

use flashdeck_shared::{DocumentFormat, FlashdeckError, Result};

use crate::markdown::MarkdownBackend;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// An in-progress document.
///
/// Nothing touches the filesystem until [`DocumentSink::save`], which writes
/// the complete document in one go.
pub trait DocumentSink {
    /// Add a heading. Level 0 is the document title.
    fn add_heading(&mut self, text: &str, level: u8);

    /// Add a paragraph, optionally starting with a bold label run.
    fn add_paragraph(&mut self, label: Option<&str>, text: &str);

    /// Add a bulleted list item.
    fn add_bullet_item(&mut self, text: &str);

    /// Write the finished document to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}

/// Factory for fresh [`DocumentSink`]s of one format.
pub trait DocumentBackend {
    /// Backend name for tracing.
    fn name(&self) -> &str;

    /// File extension (without the dot) of documents this backend writes.
    fn extension(&self) -> &str;

    /// Start a new, empty document.
    fn new_document(&self) -> Box<dyn DocumentSink>;
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Resolve the backend for `format`.
///
/// Fails with [`FlashdeckError::BackendUnavailable`] when the format was
/// compiled out of this build.
pub fn backend_for(format: DocumentFormat) -> Result<Box<dyn DocumentBackend>> {
    match format {
        DocumentFormat::Markdown => Ok(Box::new(MarkdownBackend)),
        #[cfg(feature = "docx")]
        DocumentFormat::Docx => Ok(Box::new(crate::docx::DocxBackend)),
        #[cfg(not(feature = "docx"))]
        DocumentFormat::Docx => Err(FlashdeckError::backend_unavailable(format.to_string())),
    }
}

/// Write `bytes` to `path`, creating parent directories first.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, bytes).map_err(|e| FlashdeckError::io(path, e))
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FlashdeckError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_backend_always_resolves() {
        let backend = backend_for(DocumentFormat::Markdown).expect("markdown backend");
        assert_eq!(backend.extension(), "md");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn docx_backend_resolves_with_feature() {
        let backend = backend_for(DocumentFormat::Docx).expect("docx backend");
        assert_eq!(backend.extension(), "docx");
    }

    #[cfg(not(feature = "docx"))]
    #[test]
    fn docx_backend_unavailable_without_feature() {
        let err = backend_for(DocumentFormat::Docx).err().expect("should fail");
        assert!(matches!(err, FlashdeckError::BackendUnavailable { .. }));
    }

    #[test]
    fn write_file_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_file(&blocker.join("out.md"), b"data").unwrap_err();
        assert!(matches!(err, FlashdeckError::Io { .. }));
    }
}
