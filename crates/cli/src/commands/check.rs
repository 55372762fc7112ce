use anyhow::{Context, Result};

use crate::{input_label, read_input_text};

/// Validate the input shape without printing the template.
///
/// Reports the record count on success; a malformed input surfaces the
/// parse error and a non-zero exit.
pub fn check_command(input: Option<&str>) -> Result<()> {
    let text = read_input_text(input)?;

    let roster = roster_core::parse::parse_text(&text)
        .with_context(|| format!("Malformed roster input ({})", input_label(input)))?;

    println!("roster-cli v{}", roster_core::version());
    println!("Input OK: {} ({} records)", input_label(input), roster.len());

    Ok(())
}
