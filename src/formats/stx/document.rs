//! STX document structures

use serde::{Deserialize, Serialize};

/// Material definition record.
pub const KW_MATL: &str = "MATL";
/// Section definition record.
pub const KW_SECT: &str = "SECT";
/// Node definition record.
pub const KW_NODE: &str = "NODE";
/// Bar element definition record.
pub const KW_BAR: &str = "BAR";

/// A parsed STX document: an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StxDocument {
    /// Records in file order.
    pub records: Vec<StxRecord>,
}

/// One `KEYWORD, field, field, ...` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StxRecord {
    /// Record keyword (e.g. "NODE").
    pub keyword: String,
    /// Fields after the keyword, in order, whitespace-trimmed.
    pub fields: Vec<String>,
    /// 1-indexed source line; zero for synthesized records.
    pub line: usize,
}

impl StxDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        StxDocument::default()
    }

    /// Records with the given keyword, in file order.
    pub fn records_with_keyword<'a>(
        &'a self,
        keyword: &'a str,
    ) -> impl Iterator<Item = &'a StxRecord> {
        self.records.iter().filter(move |r| r.keyword == keyword)
    }
}

impl StxRecord {
    /// Creates a synthesized record (no source line).
    #[must_use]
    pub fn new(keyword: impl Into<String>, fields: Vec<String>) -> Self {
        StxRecord {
            keyword: keyword.into(),
            fields,
            line: 0,
        }
    }

    /// Field at `index`, if present.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}
