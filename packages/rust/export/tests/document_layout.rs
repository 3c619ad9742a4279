mod common;

use common::{Op, RecordingSink, labels, sample_rows};
use flashdeck_export::render_document;
use flashdeck_shared::{RowField, RowFilter};

const TITLE: &str = "Investment Banking Flashcards";

#[test]
fn unfiltered_document_has_title_count_and_every_row() {
    let rows = sample_rows();
    let mut sink = RecordingSink::default();

    let count = render_document(&mut sink, &rows, None, TITLE);

    assert_eq!(count, 5);
    assert_eq!(sink.ops[0], Op::Heading(TITLE.into(), 0));
    assert_eq!(sink.ops[1], Op::Paragraph(None, "Total Questions: 5".into()));
    assert_eq!(sink.ops[2], Op::Paragraph(None, String::new()));
    let questions = sink
        .labels()
        .iter()
        .filter(|l| l.as_str() == "Question: ")
        .count();
    assert_eq!(questions, 5);
    // No subtitle heading without a filter.
    let headings = sink
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Heading(..)))
        .count();
    assert_eq!(headings, 1);
}

#[test]
fn filter_restricts_rows_and_adds_subtitle() {
    let rows = sample_rows();
    let filter = RowFilter::new(RowField::Category, "DCF");
    let mut sink = RecordingSink::default();

    let count = render_document(&mut sink, &rows, Some(&filter), TITLE);

    let expected = rows
        .iter()
        .filter(|r| r.category.as_deref() == Some("DCF"))
        .count();
    assert_eq!(count, expected);
    assert_eq!(count, 2);
    assert_eq!(sink.ops[1], Op::Heading("Filtered by: Type=DCF".into(), 2));
    assert_eq!(sink.ops[2], Op::Paragraph(None, "Total Questions: 2".into()));

    let questions: Vec<&str> = sink
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Paragraph(Some(l), text) if l == "Question: " => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        questions,
        ["Walk me through a DCF.", "Why use mid-year convention?"]
    );
}

#[test]
fn filter_with_no_matches_reports_zero() {
    let rows = sample_rows();
    let filter = RowFilter::new(RowField::Category, "Valuation");
    let mut sink = RecordingSink::default();

    assert_eq!(render_document(&mut sink, &rows, Some(&filter), TITLE), 0);
    assert!(sink.labels().is_empty());
    assert_eq!(sink.ops.len(), 4);
}

#[test]
fn record_block_layout() {
    let rows = sample_rows();
    let mut sink = RecordingSink::default();
    render_document(&mut sink, &rows[..1], None, TITLE);

    let block: Vec<Op> = sink.ops[3..].to_vec();
    assert_eq!(
        block,
        [
            Op::Paragraph(Some("Question: ".into()), "Walk me through a DCF.".into()),
            Op::Paragraph(
                Some("Reported In: ".into()),
                "Reported in Goldman Sachs Interview".into()
            ),
            Op::Paragraph(Some("Type: ".into()), "DCF".into()),
            Op::Paragraph(Some("Answer:".into()), String::new()),
            Op::Bullet("Project free cash flows".into()),
            Op::Bullet("Discount at WACC".into()),
            Op::Paragraph(None, "Then add terminal value.".into()),
            Op::Paragraph(None, "─".repeat(50)),
            Op::Paragraph(None, String::new()),
        ]
    );
}

#[test]
fn labeled_sections_mirror_non_empty_fields() {
    for row in sample_rows() {
        let mut sink = RecordingSink::default();
        render_document(&mut sink, std::slice::from_ref(&row), None, TITLE);

        let mut expected = vec!["Question: ".to_string()];
        if row.institution.is_some() {
            expected.push("Reported In: ".into());
        }
        if row.category.is_some() {
            expected.push("Type: ".into());
        }
        expected.push("Answer:".into());

        assert_eq!(labels(&sink.ops), expected, "row {:?}", row.id);
    }
}

#[test]
fn empty_answer_renders_only_the_label() {
    let rows = sample_rows();
    let mut sink = RecordingSink::default();
    render_document(&mut sink, &rows[4..], None, TITLE);

    let after_answer: Vec<&Op> = sink
        .ops
        .iter()
        .skip_while(|op| !matches!(op, Op::Paragraph(Some(l), _) if l == "Answer:"))
        .skip(1)
        .collect();
    assert_eq!(after_answer.len(), 2);
    assert!(!sink.ops.iter().any(|op| matches!(op, Op::Bullet(_))));
}
