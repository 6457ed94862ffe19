//! Subcommands and the helpers they share

pub mod deps;
pub mod diff;
pub mod plugins;
pub mod sections;

use clap::{Args, ValueEnum};
use pomorder_core::config::{RenderOptions, DEFAULT_COLUMN_WIDTH, DEFAULT_SEPARATOR};
use pomorder_core::errors::{PomOrderError, Result};
use pomorder_core::report::ErrorReport;
use serde::de::DeserializeOwned;
use std::path::Path;

/// How a command ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Column layout flags shared by every command that prints a diff
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Minimum column width in characters
    #[arg(long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub width: usize,

    /// Text placed between the two columns
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,
}

impl LayoutArgs {
    pub fn options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_column_width(self.width)
            .with_separator(self.separator.clone())
    }
}

/// Read one name per line, trimming whitespace and skipping blank lines
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| PomOrderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read and decode a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| PomOrderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Print rule reports and classify the run
pub fn print_reports(reports: &[ErrorReport], format: OutputFormat) -> Result<Outcome> {
    match format {
        OutputFormat::Text => {
            if reports.is_empty() {
                println!("✓ No violations");
            }
            for report in reports {
                println!("{}", report);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
    }

    if reports.is_empty() {
        Ok(Outcome::Clean)
    } else {
        Ok(Outcome::Violations)
    }
}
