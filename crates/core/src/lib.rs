//! roster-core
//!
//! Core library for normalizing attendance rosters.
//!
//! A roster arrives as flat text: four lines per student (display name,
//! identifier, then the literal "Present" and "Absent" labels). This crate
//! parses that shape into records, sorts them by identifier, and renders
//! the normalized attendance template.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, batch jobs, etc.).

pub mod model;
pub mod parse;
pub mod report;
pub mod stats;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
