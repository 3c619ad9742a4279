//! Core domain types for Flashdeck question banks.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::FlashdeckError;

/// Source label stamped on every row loaded from the technical question bank.
pub const TECHNICAL_SOURCE: &str = "Technical";

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// One entry of the input collection, exactly as scraped.
///
/// Every field is optional. Absent and `null` both decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Opaque question identifier. JSON numbers are accepted and kept as text.
    #[serde(default, deserialize_with = "string_or_number")]
    pub question_number: Option<String>,
    /// Question text, possibly with whitespace noise.
    #[serde(default)]
    pub question: Option<String>,
    /// Answer text, possibly with whitespace noise.
    #[serde(default)]
    pub answer: Option<String>,
    /// Free-form tags. Position carries no meaning.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl RawRecord {
    /// Tags as a slice, empty when the field was absent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "questionNumber must be a string or number, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// NormalizedRow
// ---------------------------------------------------------------------------

/// A classified, whitespace-normalized projection of a [`RawRecord`].
///
/// Built once per record and only read afterwards. Missing values stay `None`
/// until serialization, where they are written as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRow {
    #[serde(serialize_with = "empty_if_none")]
    pub id: Option<String>,
    pub question_text: String,
    /// Label from the institution set, if any tag matched.
    #[serde(serialize_with = "empty_if_none")]
    pub institution: Option<String>,
    /// Label from the category set, if any tag matched.
    #[serde(serialize_with = "empty_if_none")]
    pub category: Option<String>,
    pub answer_text: String,
    pub source_tag: String,
}

impl NormalizedRow {
    /// Value of `field` as rendered text (`""` when absent).
    pub fn field_value(&self, field: RowField) -> &str {
        match field {
            RowField::Id => self.id.as_deref().unwrap_or_default(),
            RowField::Question => &self.question_text,
            RowField::Institution => self.institution.as_deref().unwrap_or_default(),
            RowField::Category => self.category.as_deref().unwrap_or_default(),
            RowField::Answer => &self.answer_text,
            RowField::Source => &self.source_tag,
        }
    }
}

fn empty_if_none<S>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

// ---------------------------------------------------------------------------
// RowField / RowFilter
// ---------------------------------------------------------------------------

/// Addressable columns of a [`NormalizedRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Id,
    Question,
    Institution,
    Category,
    Answer,
    Source,
}

impl RowField {
    /// Human-facing column label, as printed in document sections.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "Question Number",
            Self::Question => "Question",
            Self::Institution => "Reported In",
            Self::Category => "Type",
            Self::Answer => "Answer",
            Self::Source => "Source",
        }
    }

    /// Canonical CLI/config spelling.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Question => "question",
            Self::Institution => "institution",
            Self::Category => "category",
            Self::Answer => "answer",
            Self::Source => "source",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RowField {
    type Err = FlashdeckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "id" | "question-number" => Ok(Self::Id),
            "question" => Ok(Self::Question),
            "institution" | "reported-in" => Ok(Self::Institution),
            "category" | "type" => Ok(Self::Category),
            "answer" => Ok(Self::Answer),
            "source" => Ok(Self::Source),
            _ => Err(FlashdeckError::validation(format!(
                "unknown field '{s}': expected one of id, question, institution, category, answer, source"
            ))),
        }
    }
}

/// Exact-match restriction on a single field, e.g. `category=DCF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub field: RowField,
    pub value: String,
}

impl RowFilter {
    pub fn new(field: RowField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Whether `row` carries exactly this value in the filtered field.
    pub fn matches(&self, row: &NormalizedRow) -> bool {
        row.field_value(self.field) == self.value
    }

    /// `Label=value`, as shown in document subtitles.
    pub fn describe(&self) -> String {
        format!("{}={}", self.field.label(), self.value)
    }
}

impl FromStr for RowFilter {
    type Err = FlashdeckError;

    /// Parse `field=value`. Only the first `=` splits; the value may contain more.
    /// Whitespace around the value is dropped, since stored values are trimmed.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (field, value) = s.split_once('=').ok_or_else(|| {
            FlashdeckError::validation(format!("filter '{s}' must have the form field=value"))
        })?;
        Ok(Self::new(field.parse()?, value.trim()))
    }
}

// ---------------------------------------------------------------------------
// DocumentFormat
// ---------------------------------------------------------------------------

/// Output container for rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain Markdown, always available.
    #[serde(alias = "md")]
    Markdown,
    /// Word document, available when built with the `docx` feature.
    Docx,
}

impl DocumentFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Markdown => "markdown",
            Self::Docx => "docx",
        })
    }
}

impl FromStr for DocumentFormat {
    type Err = FlashdeckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "docx" | "word" => Ok(Self::Docx),
            _ => Err(FlashdeckError::validation(format!(
                "unknown format '{s}': expected 'markdown' or 'docx'"
            ))),
        }
    }
}
