use anyhow::{Context, Result};
use roster_core::stats::RosterSummary;

use crate::{input_label, read_input_text};

/// Print record counts and duplicate-identifier diagnostics for a roster.
pub fn summary_command(input: Option<&str>, json: bool) -> Result<()> {
    let text = read_input_text(input)?;

    let roster = roster_core::parse::parse_text(&text)
        .with_context(|| format!("Malformed roster input ({})", input_label(input)))?;
    let summary = RosterSummary::of(&roster);

    if json {
        let serialized = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize summary to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Roster summary ({}):", input_label(input));
        println!("  Records: {}", summary.total_records);
        println!("  Distinct identifiers: {}", summary.distinct_identifiers);
        if summary.identifiers_unique() {
            println!("  Duplicates: (none)");
        } else {
            println!("  Duplicates ({}):", summary.duplicates.len());
            for group in &summary.duplicates {
                println!("  - {} x{}", group.identifier, group.count);
            }
        }
    }

    Ok(())
}
