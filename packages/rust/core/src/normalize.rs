//! Whitespace normalization for scraped question and answer text.
//!
//! Each pass is a function `&str -> String` applied in sequence. Neither
//! collapse pass can produce input for the other, so the pipeline is idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Normalize free text: collapse newline runs, collapse space/tab runs, trim.
///
/// Absent or empty input yields an empty string.
pub fn normalize_text(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let mut result = collapse_newlines(text);
    result = collapse_horizontal_whitespace(&result);
    result.trim().to_string()
}

// ---------------------------------------------------------------------------
// Pass 1: Collapse newline runs
// ---------------------------------------------------------------------------

/// Replace every run of consecutive `\n` with a single `\n`.
fn collapse_newlines(text: &str) -> String {
    static NEWLINES_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

    NEWLINES_RE.replace_all(text, "\n").into_owned()
}

// ---------------------------------------------------------------------------
// Pass 2: Collapse spaces and tabs
// ---------------------------------------------------------------------------

/// Replace every run of spaces/tabs with a single space.
fn collapse_horizontal_whitespace(text: &str) -> String {
    static BLANKS_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

    BLANKS_RE.replace_all(text, " ").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
