//! Diff command
//!
//! Usage: pomorder diff --actual <FILE> --required <FILE> [--width <N>]

use super::{read_lines, LayoutArgs, OutputFormat, Outcome};
use clap::Args;
use pomorder_core::diff::{build_edit_script, render_columns, EditOperation};
use pomorder_core::errors::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// File with the actual order, one entry per line
    #[arg(long)]
    pub actual: PathBuf,

    /// File with the required order, one entry per line
    #[arg(long)]
    pub required: PathBuf,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Debug, Serialize)]
struct DiffOutput<'a> {
    matches: bool,
    script: &'a [EditOperation],
    left: &'a [String],
    right: &'a [String],
}

/// Execute diff command
pub fn execute(args: DiffArgs, format: OutputFormat) -> Result<Outcome> {
    let actual = read_lines(&args.actual)?;
    let required = read_lines(&args.required)?;

    let script = build_edit_script(&actual, &required);
    let columns = render_columns(&actual, &script)?;

    match format {
        OutputFormat::Text => {
            if columns.rows() > 0 {
                println!("{}", columns.to_text(&args.layout.options()));
            }
        }
        OutputFormat::Json => {
            let output = DiffOutput {
                matches: script.is_empty(),
                script: &script,
                left: &columns.left,
                right: &columns.right,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if script.is_empty() {
        Ok(Outcome::Clean)
    } else {
        Ok(Outcome::Violations)
    }
}
