//! Deps command
//!
//! Usage: pomorder deps --file <JSON> [--no-manage-versions] [--no-manage-exclusions]

use super::{print_reports, read_json, OutputFormat, Outcome};
use clap::Args;
use pomorder_core::config::{DependencyConfig, RenderOptions};
use pomorder_core::errors::Result;
use pomorder_core::rules::{enforce, Dependency, Rule};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DepsArgs {
    /// JSON array of dependencies (`groupId`, `artifactId`, optional `version`, `exclusions`)
    #[arg(long)]
    pub file: PathBuf,

    /// Allow versions outside <dependencyManagement>
    #[arg(long)]
    pub no_manage_versions: bool,

    /// Report ${project.version} outside <dependencyManagement> too
    #[arg(long)]
    pub no_allow_unmanaged_project_versions: bool,

    /// Allow exclusions outside <dependencyManagement>
    #[arg(long)]
    pub no_manage_exclusions: bool,
}

impl DepsArgs {
    fn config(&self) -> DependencyConfig {
        DependencyConfig {
            manage_versions: !self.no_manage_versions,
            allow_unmanaged_project_versions: !self.no_allow_unmanaged_project_versions,
            manage_exclusions: !self.no_manage_exclusions,
        }
    }
}

/// Execute deps command
pub fn execute(args: DepsArgs, format: OutputFormat) -> Result<Outcome> {
    let dependencies: Vec<Dependency> = read_json(&args.file)?;

    let rule = Rule::DependencyConfiguration {
        config: args.config(),
        dependencies,
    };
    let reports = enforce(&rule, &RenderOptions::default())?;
    print_reports(&reports, format)
}
