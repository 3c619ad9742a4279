//! Word (`.docx`) backend built on `docx-rs`.

use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style,
    StyleType,
};
use tracing::debug;

use flashdeck_shared::{FlashdeckError, Result};

use crate::sink::{DocumentBackend, DocumentSink, ensure_parent};

/// Numbering definition shared by every bullet item.
const BULLET_NUMBERING_ID: usize = 1;

/// Deepest heading style defined in [`base_document`].
const MAX_HEADING_LEVEL: u8 = 3;

/// Backend producing `.docx` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBackend;

impl DocumentBackend for DocxBackend {
    fn name(&self) -> &str {
        "docx"
    }

    fn extension(&self) -> &str {
        "docx"
    }

    fn new_document(&self) -> Box<dyn DocumentSink> {
        Box::new(DocxDocument::default())
    }
}

/// A Word document under construction.
///
/// Paragraphs are buffered and only assembled into a package on save.
#[derive(Debug, Default)]
pub struct DocxDocument {
    paragraphs: Vec<Paragraph>,
}

/// Heading style id for a level; level 0 is the document title.
fn heading_style(level: u8) -> String {
    match level {
        0 => "Title".to_string(),
        n => format!("Heading{}", n.min(MAX_HEADING_LEVEL)),
    }
}

/// A run of `text` where each embedded `\n` becomes a line break.
/// Word ignores raw newlines inside `<w:t>`.
fn text_run(text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}

/// Styles and numbering every document starts with.
fn base_document() -> Docx {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for level in 1..=MAX_HEADING_LEVEL {
        docx = docx.add_style(
            Style::new(heading_style(level), StyleType::Paragraph)
                .name(format!("Heading {level}"))
                .size(36 - 4 * usize::from(level))
                .bold(),
        );
    }

    docx
}

impl DocumentSink for DocxDocument {
    fn add_heading(&mut self, text: &str, level: u8) {
        let paragraph = Paragraph::new()
            .add_run(text_run(text))
            .style(&heading_style(level))
            .align(AlignmentType::Center);
        self.paragraphs.push(paragraph);
    }

    fn add_paragraph(&mut self, label: Option<&str>, text: &str) {
        let mut paragraph = Paragraph::new();
        if let Some(label) = label {
            paragraph = paragraph.add_run(Run::new().add_text(label).bold());
        }
        if !text.is_empty() {
            paragraph = paragraph.add_run(text_run(text));
        }
        self.paragraphs.push(paragraph);
    }

    fn add_bullet_item(&mut self, text: &str) {
        let paragraph = Paragraph::new()
            .add_run(text_run(text))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
        self.paragraphs.push(paragraph);
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        ensure_parent(path)?;

        let count = self.paragraphs.len();
        let docx = self
            .paragraphs
            .drain(..)
            .fold(base_document(), |docx, p| docx.add_paragraph(p));

        let file = std::fs::File::create(path).map_err(|e| FlashdeckError::io(path, e))?;
        docx.build()
            .pack(file)
            .map_err(|e| FlashdeckError::render(format!("failed to package {}: {e}", path.display())))?;

        debug!(path = %path.display(), paragraphs = count, "wrote docx document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use docx_rs::BuildXML;

    use super::*;

    fn paragraph_xml(paragraph: &Paragraph) -> String {
        String::from_utf8(paragraph.build()).expect("utf-8 xml")
    }

    #[test]
    fn heading_styles_map_levels() {
        assert_eq!(heading_style(0), "Title");
        assert_eq!(heading_style(2), "Heading2");
        // Only Heading1..Heading3 are defined; deeper levels reuse the last.
        assert_eq!(heading_style(5), "Heading3");
    }

    #[test]
    fn multi_line_question_keeps_line_breaks() {
        let mut doc = DocxDocument::default();
        doc.add_paragraph(Some("Question: "), "Walk me through:\n• the IS\n• the BS");

        let xml = paragraph_xml(&doc.paragraphs[0]);
        assert_eq!(xml.matches("<w:br").count(), 2);
        assert!(xml.contains("Walk me through:"));
        assert!(xml.contains("• the BS"));
        assert!(!xml.contains("Walk me through:• the IS"));
    }

    #[test]
    fn single_line_text_has_no_breaks() {
        let xml = paragraph_xml(&Paragraph::new().add_run(text_run("What is EBITDA?")));
        assert!(!xml.contains("<w:br"));
        assert!(xml.contains("What is EBITDA?"));
    }

    #[test]
    fn buffers_until_save() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.docx");

        let mut doc = DocxDocument::default();
        doc.add_heading("Deck", 0);
        doc.add_paragraph(Some("Question: "), "What is EBITDA?");
        doc.add_bullet_item("Earnings before interest");
        assert_eq!(doc.paragraphs.len(), 3);
        assert!(!path.exists());

        doc.save(&path).expect("save");
        let bytes = std::fs::read(&path).unwrap();
        // .docx is a zip container.
        assert_eq!(&bytes[..2], b"PK");
    }
}
