use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{input_label, read_input_text};

/// Parse the roster, sort it by identifier, and print the normalized
/// attendance template (or the sorted records as JSON) to stdout.
///
/// The template is rendered fully in memory before anything is written,
/// so malformed input never produces partial output.
pub fn normalize_command(input: Option<&str>, json: bool) -> Result<()> {
    let text = read_input_text(input)?;

    let mut roster = roster_core::parse::parse_text(&text)
        .with_context(|| format!("Malformed roster input ({})", input_label(input)))?;
    roster.sort_by_identifier();

    if json {
        // JSON mode keeps the names; the plain template does not.
        let serialized = serde_json::to_string_pretty(roster.records())
            .context("Failed to serialize roster to JSON")?;
        println!("{}", serialized);
    } else {
        let rendered = roster_core::report::render_template(&roster);
        io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write template to stdout")?;
    }

    Ok(())
}
