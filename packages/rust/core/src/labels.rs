//! Closed label sets recognized in question tags.
//!
//! The two sets are disjoint: a tag names either where a question was
//! reported or what subject it covers, never both.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags naming where a question was asked. `IB Vine Select` is the one
/// entry that is not an interviewing firm.
pub const INSTITUTION_LABELS: &[&str] = &[
    "IB Vine Select",
    "Reported in Allen & Company Interview",
    "Reported in Ardea Partners Interview",
    "Reported in Ares Management Interview",
    "Reported in BMO Interview",
    "Reported in Bank of America Interview",
    "Reported in Barclays Interview",
    "Reported in Brookfield Asset Management Interview",
    "Reported in CIBC Capital Markets Interview",
    "Reported in Centerview Partners Interview",
    "Reported in Citi Interview",
    "Reported in Deutsche Bank Interview",
    "Reported in Evercore Interview",
    "Reported in FT Partners Interview",
    "Reported in Goldman Sachs Interview",
    "Reported in Greenhill & Co. Interview",
    "Reported in Guggenheim Partners Interview",
    "Reported in Houlihan Lokey Interview",
    "Reported in J.P. Morgan Interview",
    "Reported in Jefferies Interview",
    "Reported in Lazard Interview",
    "Reported in Leerink Partners Interview",
    "Reported in LionTree Interview",
    "Reported in M. Klein & Co. Interview",
    "Reported in Moelis & Co. Interview",
    "Reported in Morgan Stanley Interview",
    "Reported in Nomura Greentech Interview",
    "Reported in PJT Partners Interview",
    "Reported in Perella Weinberg Interview",
    "Reported in Piper Sandler Interview",
    "Reported in Qatalyst Partners Interview",
    "Reported in RBC Interview",
    "Reported in Raine Group Interview",
    "Reported in Rothschild Interview",
    "Reported in UBS Interview",
    "Reported in Union Square Advisors Interview",
    "Reported in Wells Fargo Interview",
    "Reported in William Blair Interview",
];

/// Subject-area tags.
pub const CATEGORY_LABELS: &[&str] = &[
    "Accounting",
    "DCF",
    "Enterprise & Equity Value",
    "Finance Brain Teasers",
    "General Brain Teasers",
    "Leveraged Buyouts (LBOs)",
    "Market Knowledge",
    "Merger Model (M&A)",
    "Restructuring / Distressed M&A",
    "Restructuring group",
    "Technology Banking",
    "Valuation",
];

static INSTITUTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INSTITUTION_LABELS.iter().copied().collect());

static CATEGORIES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CATEGORY_LABELS.iter().copied().collect());

/// The canonical institution label equal to `tag`, if any.
pub fn institution_label(tag: &str) -> Option<&'static str> {
    INSTITUTIONS.get(tag).copied()
}

/// The canonical category label equal to `tag`, if any.
pub fn category_label(tag: &str) -> Option<&'static str> {
    CATEGORIES.get(tag).copied()
}
