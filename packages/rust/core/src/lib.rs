//! Question bank loading and tag classification for Flashdeck.
//!
//! This crate turns raw scraped records into [`NormalizedRow`]s: text is
//! whitespace-normalized and two labels (institution and category) are picked
//! out of each record's tags using fixed label sets.
//!
//! [`NormalizedRow`]: flashdeck_shared::NormalizedRow

pub mod analysis;
pub mod classify;
pub mod labels;
pub mod loader;
pub mod normalize;

pub use analysis::{TagReport, analyze_tags};
pub use classify::{ClassificationSummary, TagClassification, classify_all, classify_record, classify_tags};
pub use loader::{load_records, load_rows, parse_records};
pub use normalize::normalize_text;
