//! Roster text parser.
//!
//! Input is flat text, four lines per student:
//!
//! ```text
//! ANIVENI RANIKA
//! 217023026001
//! Present
//! Absent
//! ```
//!
//! Leading/trailing blank lines around the whole text are ignored and
//! every retained line is trimmed of surrounding whitespace. The third
//! and fourth line of each block are skipped without validation; the
//! normalized template re-emits the canonical labels regardless of what
//! the source carried.

use thiserror::Error;

use crate::model::{Record, Roster, LINES_PER_RECORD};

/// Error type for roster parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input line count is not a multiple of the block size, so the
    /// trailing block is incomplete.
    ///
    /// This is intentionally explicit so callers can surface a clear
    /// message instead of silently truncating the trailing lines.
    #[error(
        "input has {line_count} lines, not a multiple of {LINES_PER_RECORD}; \
         incomplete record starts at line {starts_at_line}"
    )]
    IncompleteBlock {
        /// 1-based line number where the incomplete trailing block starts.
        starts_at_line: usize,
        /// Total number of lines after trimming.
        line_count: usize,
    },
}

/// Convenience result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse roster text into a `Roster`, preserving input order.
///
/// Whitespace-only input yields an empty roster. Any other input whose
/// trimmed line count is not a multiple of four fails with
/// `ParseError::IncompleteBlock` and produces no partial roster.
pub fn parse_text(text: &str) -> ParseResult<Roster> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Roster::default());
    }

    let lines: Vec<&str> = trimmed.lines().map(str::trim).collect();

    let remainder = lines.len() % LINES_PER_RECORD;
    if remainder != 0 {
        return Err(ParseError::IncompleteBlock {
            starts_at_line: lines.len() - remainder + 1,
            line_count: lines.len(),
        });
    }

    let records = lines
        .chunks_exact(LINES_PER_RECORD)
        .map(|block| Record::new(block[0], block[1]))
        .collect();

    Ok(Roster::new(records))
}
