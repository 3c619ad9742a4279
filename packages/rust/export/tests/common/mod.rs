#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use flashdeck_export::{DocumentBackend, DocumentSink};
use flashdeck_shared::{FlashdeckError, NormalizedRow, Result, TECHNICAL_SOURCE};

/// One instruction received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Heading(String, u8),
    Paragraph(Option<String>, String),
    Bullet(String),
}

/// In-memory sink that keeps every instruction it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<Op>,
    pub saved_to: Option<PathBuf>,
    log: Option<Rc<RefCell<Vec<(PathBuf, Vec<Op>)>>>>,
}

impl RecordingSink {
    /// Labels of labeled paragraphs, in order.
    pub fn labels(&self) -> Vec<String> {
        labels(&self.ops)
    }
}

pub fn labels(ops: &[Op]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Paragraph(Some(label), _) => Some(label.clone()),
            _ => None,
        })
        .collect()
}

impl DocumentSink for RecordingSink {
    fn add_heading(&mut self, text: &str, level: u8) {
        self.ops.push(Op::Heading(text.to_string(), level));
    }

    fn add_paragraph(&mut self, label: Option<&str>, text: &str) {
        self.ops
            .push(Op::Paragraph(label.map(String::from), text.to_string()));
    }

    fn add_bullet_item(&mut self, text: &str) {
        self.ops.push(Op::Bullet(text.to_string()));
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.saved_to = Some(path.to_path_buf());
        if let Some(log) = &self.log {
            log.borrow_mut().push((path.to_path_buf(), self.ops.clone()));
        }
        Ok(())
    }
}

/// Backend whose documents are recorded instead of written.
///
/// With `fail_on` set, saving the n-th document (1-based) fails.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    pub saved: Rc<RefCell<Vec<(PathBuf, Vec<Op>)>>>,
    pub fail_on: Option<usize>,
}

impl RecordingBackend {
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saved.borrow().iter().map(|(p, _)| p.clone()).collect()
    }
}

struct FailingSink;

impl DocumentSink for FailingSink {
    fn add_heading(&mut self, _text: &str, _level: u8) {}
    fn add_paragraph(&mut self, _label: Option<&str>, _text: &str) {}
    fn add_bullet_item(&mut self, _text: &str) {}

    fn save(&mut self, path: &Path) -> Result<()> {
        Err(FlashdeckError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only target"),
        ))
    }
}

impl DocumentBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn extension(&self) -> &str {
        "rec"
    }

    fn new_document(&self) -> Box<dyn DocumentSink> {
        let next = self.saved.borrow().len() + 1;
        if self.fail_on == Some(next) {
            return Box::new(FailingSink);
        }
        Box::new(RecordingSink {
            log: Some(Rc::clone(&self.saved)),
            ..RecordingSink::default()
        })
    }
}

pub fn row(
    id: &str,
    question: &str,
    institution: Option<&str>,
    category: Option<&str>,
    answer: &str,
) -> NormalizedRow {
    NormalizedRow {
        id: Some(id.to_string()),
        question_text: question.to_string(),
        institution: institution.map(String::from),
        category: category.map(String::from),
        answer_text: answer.to_string(),
        source_tag: TECHNICAL_SOURCE.to_string(),
    }
}

/// A small bank covering every label combination.
pub fn sample_rows() -> Vec<NormalizedRow> {
    vec![
        row(
            "1",
            "Walk me through a DCF.",
            Some("Reported in Goldman Sachs Interview"),
            Some("DCF"),
            "• Project free cash flows\n• Discount at WACC\nThen add terminal value.",
        ),
        row("2", "What is goodwill?", None, Some("Accounting"), "Excess purchase price."),
        row(
            "3",
            "Why use mid-year convention?",
            Some("IB Vine Select"),
            Some("DCF"),
            "- Cash arrives throughout the year",
        ),
        row("4", "Tell me a brain teaser.", Some("Reported in UBS Interview"), None, "Sure."),
        row("5", "Unlabelled question", None, None, ""),
    ]
}
