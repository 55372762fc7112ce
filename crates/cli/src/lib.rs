use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

pub mod commands;

/// Read the roster text from a file path, or from standard input when the
/// path is omitted or given as `-`.
pub fn read_input_text(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if path != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster input: {path}")),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read roster input from stdin")?;
            Ok(text)
        }
    }
}

/// Human-readable label for the input source, for diagnostics.
pub fn input_label(input: Option<&str>) -> &str {
    match input {
        Some(path) if path != "-" => path,
        _ => "stdin",
    }
}
