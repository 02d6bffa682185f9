// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}

/// Render a value as JSON in the given format
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Compact => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
}

/// Print a value as JSON on stdout
pub fn print<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> serde_json::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
