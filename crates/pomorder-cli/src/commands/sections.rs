//! Sections command
//!
//! Usage: pomorder sections --actual <FILE> [--priority <SECTION>]...

use super::{print_reports, read_lines, LayoutArgs, OutputFormat, Outcome};
use clap::Args;
use pomorder_core::errors::Result;
use pomorder_core::rules::{enforce, Rule};
use pomorder_core::sections::{PomSection, PomSectionOrder};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// File listing the POM's top-level sections in declaration order
    #[arg(long)]
    pub actual: PathBuf,

    /// Section to move ahead of the canonical order (repeatable)
    #[arg(long = "priority")]
    pub priorities: Vec<String>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Execute sections command
pub fn execute(args: SectionsArgs, format: OutputFormat) -> Result<Outcome> {
    let priorities = args
        .priorities
        .iter()
        .map(|name| name.parse::<PomSection>())
        .collect::<Result<Vec<_>>>()?;
    let order = PomSectionOrder::with_priorities(&priorities);

    let actual = read_lines(&args.actual)?;
    if let Some(unknown) = actual.iter().find(|name| PomSection::from_name(name).is_none()) {
        tracing::warn!(section = %unknown, "not a POM section; it has no required position");
    }

    let rule = Rule::SectionOrder { order, actual };
    let reports = enforce(&rule, &args.layout.options())?;
    print_reports(&reports, format)
}
