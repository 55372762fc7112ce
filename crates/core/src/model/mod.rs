//! Core data model for roster records.
//!
//! This module defines:
//! - `Record`: one student entry (name + identifier).
//! - `Roster`: the ordered collection of records for a single run.
//! - The literal status labels every record block carries.

/// Number of input lines that make up one record block.
pub const LINES_PER_RECORD: usize = 4;

/// Literal status label on the third line of every block, re-emitted
/// verbatim in the normalized template.
pub const PRESENT_LABEL: &str = "Present";

/// Literal status label on the fourth line of every block, re-emitted
/// verbatim in the normalized template.
pub const ABSENT_LABEL: &str = "Absent";

/// One parsed student entry.
///
/// The two trailing status lines of the source block are discarded on
/// read; only the name and the identifier are retained.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Display name (first line of the block). Not part of any output
    /// template; kept for listings and diagnostics.
    pub name: String,
    /// Identifying string (second line of the block). This is the sort
    /// key. It usually looks numeric but is always compared as a string.
    pub identifier: String,
}

impl Record {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self { name: name.into(), identifier: identifier.into() }
    }
}

/// The full ordered collection of records for one run.
///
/// Built by the parser, re-ordered in place by `sort_by_identifier`,
/// consumed by the report renderer. Identifiers are expected to be unique
/// within one roster; duplicates are tolerated (the sort is stable, so
/// they keep their original relative order) and surfaced by the stats
/// module.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort records ascending by identifier, lexicographically.
    ///
    /// `Vec::sort_by` is stable, so records sharing an identifier retain
    /// their original relative order. No numeric parsing is performed:
    /// `"10"` sorts before `"9"`.
    pub fn sort_by_identifier(&mut self) {
        self.records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    /// Iterate the identifiers in current roster order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.identifier.as_str())
    }
}

impl From<Vec<Record>> for Roster {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
