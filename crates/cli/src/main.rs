use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_cli::commands::{check_command, normalize_command, summary_command};

/// Attendance roster normalizer CLI.
///
/// This CLI is a thin wrapper around `roster-core` (exposed in code as
/// `roster_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "roster-cli",
    version,
    about = "Normalize attendance rosters: parse, sort by identifier, reprint",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the roster, sort by identifier, and print the attendance template.
    ///
    /// The input is four lines per student: name, identifier, "Present",
    /// "Absent". The output is three lines per student, sorted ascending
    /// by identifier: the identifier, "Present", "Absent".
    Normalize {
        /// Input file path. Reads standard input when omitted or `-`.
        input: Option<String>,

        /// Emit the sorted records (name + identifier) as JSON instead of
        /// the plain template.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Validate the input shape without printing the template.
    ///
    /// Succeeds with the record count if the line count is a multiple of
    /// four; fails with the parse error otherwise.
    Check {
        /// Input file path. Reads standard input when omitted or `-`.
        input: Option<String>,
    },

    /// Report record counts and duplicate-identifier diagnostics.
    Summary {
        /// Input file path. Reads standard input when omitted or `-`.
        input: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to normalizing stdin when no subcommand is provided.
    match cli.command.unwrap_or(Command::Normalize { input: None, json: false }) {
        Command::Normalize { input, json } => normalize_command(input.as_deref(), json)?,
        Command::Check { input } => check_command(input.as_deref())?,
        Command::Summary { input, json } => summary_command(input.as_deref(), json)?,
    }

    Ok(())
}
