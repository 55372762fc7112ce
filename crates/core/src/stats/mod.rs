//! Roster statistics.
//!
//! Rosters are expected to have unique identifiers, but the parser does
//! not enforce that. This module computes the counts a frontend needs to
//! report on a roster and to flag duplicate identifiers before the
//! template is trusted.

use std::collections::HashMap;

use crate::model::Roster;

/// A group of records sharing one identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DuplicateGroup {
    pub identifier: String,
    /// How many records carry this identifier (always >= 2).
    pub count: usize,
}

/// Summary counts over one roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterSummary {
    /// Total number of records.
    pub total_records: usize,
    /// Number of distinct identifiers.
    pub distinct_identifiers: usize,
    /// Identifiers shared by more than one record, in first-seen order.
    pub duplicates: Vec<DuplicateGroup>,
}

impl RosterSummary {
    /// Compute the summary for a roster.
    pub fn of(roster: &Roster) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for identifier in roster.identifiers() {
            let count = counts.entry(identifier).or_insert(0);
            if *count == 0 {
                first_seen.push(identifier);
            }
            *count += 1;
        }

        let mut duplicates = Vec::new();
        for id in &first_seen {
            let count = counts[id];
            if count > 1 {
                duplicates.push(DuplicateGroup { identifier: (*id).to_string(), count });
            }
        }

        Self {
            total_records: roster.len(),
            distinct_identifiers: first_seen.len(),
            duplicates,
        }
    }

    /// True when every identifier in the roster is unique.
    pub fn identifiers_unique(&self) -> bool {
        self.duplicates.is_empty()
    }
}
