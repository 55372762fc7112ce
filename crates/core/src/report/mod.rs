//! Normalized attendance template rendering.
//!
//! The template is three lines per record, in roster order: the
//! identifier, then the literal "Present" and "Absent" labels. No header,
//! no trailing summary. Names are deliberately absent; the template is a
//! blank attendance sheet keyed by identifier only.

use std::io;

use crate::model::{Roster, ABSENT_LABEL, PRESENT_LABEL};

/// Render the full attendance template into a string.
///
/// Rendering in memory first lets callers guarantee all-or-nothing
/// output: nothing is written anywhere until the whole roster has been
/// formatted.
pub fn render_template(roster: &Roster) -> String {
    let mut out = String::new();
    for record in roster {
        out.push_str(&record.identifier);
        out.push('\n');
        out.push_str(PRESENT_LABEL);
        out.push('\n');
        out.push_str(ABSENT_LABEL);
        out.push('\n');
    }
    out
}

/// Write the attendance template to the given writer.
///
/// Streaming variant of `render_template`; write failures (e.g. a broken
/// stdout pipe) surface as errors instead of panics.
pub fn write_template<W: io::Write>(writer: &mut W, roster: &Roster) -> io::Result<()> {
    for record in roster {
        writeln!(writer, "{}", record.identifier)?;
        writeln!(writer, "{PRESENT_LABEL}")?;
        writeln!(writer, "{ABSENT_LABEL}")?;
    }
    Ok(())
}
