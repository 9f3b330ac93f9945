//! Output formatting for CLI reports.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render a report in the requested format.
pub fn render<T: Serialize + Display>(report: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
    }
}

/// Print a report to stdout.
pub fn print_report<T: Serialize + Display>(report: &T, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
