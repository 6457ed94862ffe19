//! Plugins command
//!
//! Usage: pomorder plugins --file <JSON> [--plugin-managing-pom <G:A>]...

use super::{print_reports, read_json, OutputFormat, Outcome};
use clap::Args;
use pomorder_core::config::{PluginConfig, PluginManagementLocationConfig, RenderOptions};
use pomorder_core::errors::Result;
use pomorder_core::rules::{enforce, BuildModel, Rule};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PluginsArgs {
    /// JSON build model (`groupId`, `artifactId`, `packaging`, `plugins`, `pluginManagement`)
    #[arg(long)]
    pub file: PathBuf,

    /// Allow plugin versions outside <pluginManagement>
    #[arg(long)]
    pub no_manage_versions: bool,

    /// Report ${project.version} outside <pluginManagement> too
    #[arg(long)]
    pub no_allow_unmanaged_project_versions: bool,

    /// Allow plugin <configuration> outside <pluginManagement>
    #[arg(long)]
    pub no_manage_configurations: bool,

    /// Allow plugin <dependencies> outside <pluginManagement>
    #[arg(long)]
    pub no_manage_dependencies: bool,

    /// Do not let parent POMs (packaging `pom`) manage plugins
    #[arg(long)]
    pub no_allow_parent_poms: bool,

    /// `groupId:artifactId` of a POM allowed to manage plugins (repeatable)
    #[arg(long = "plugin-managing-pom")]
    pub plugin_managing_poms: Vec<String>,
}

impl PluginsArgs {
    fn config(&self) -> PluginConfig {
        PluginConfig {
            manage_versions: !self.no_manage_versions,
            allow_unmanaged_project_versions: !self.no_allow_unmanaged_project_versions,
            manage_configurations: !self.no_manage_configurations,
            manage_dependencies: !self.no_manage_dependencies,
        }
    }

    fn location(&self) -> PluginManagementLocationConfig {
        PluginManagementLocationConfig {
            allow_parent_poms: !self.no_allow_parent_poms,
            plugin_managing_poms: self.plugin_managing_poms.clone(),
        }
    }
}

/// Execute plugins command
pub fn execute(args: PluginsArgs, format: OutputFormat) -> Result<Outcome> {
    let model: BuildModel = read_json(&args.file)?;

    let rule = Rule::Compound(vec![
        Rule::PluginConfiguration {
            config: args.config(),
            plugins: model.plugins.clone(),
        },
        Rule::PluginManagementLocation {
            config: args.location(),
            model,
        },
    ]);
    let reports = enforce(&rule, &RenderOptions::default())?;
    print_reports(&reports, format)
}
