//! Immutable configuration passed into rendering and rule evaluation.
//!
//! These structs are built once (from CLI flags or a JSON document) and only
//! ever borrowed afterwards.

use serde::{Deserialize, Serialize};

/// Column width used when none is configured
pub const DEFAULT_COLUMN_WIDTH: usize = 25;

/// Separator placed between the two columns when none is configured
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Layout of the paired-column text block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Minimum width of each column in characters; longer rows are not truncated
    pub column_width: usize,
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Switches for the dependency configuration rule
///
/// # Defaults
///
/// All switches are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Dependency versions must be declared in `<dependencyManagement>`
    pub manage_versions: bool,
    /// `${project.version}` and `${version}` may appear outside `<dependencyManagement>`
    pub allow_unmanaged_project_versions: bool,
    /// Dependency exclusions must be declared in `<dependencyManagement>`
    pub manage_exclusions: bool,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            manage_versions: true,
            allow_unmanaged_project_versions: true,
            manage_exclusions: true,
        }
    }
}

/// Switches for the plugin configuration rule
///
/// # Defaults
///
/// All switches are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin versions must be declared in `<pluginManagement>`
    pub manage_versions: bool,
    /// `${project.version}` and `${version}` may appear outside `<pluginManagement>`
    pub allow_unmanaged_project_versions: bool,
    /// Plugin `<configuration>` must be declared in `<pluginManagement>`
    pub manage_configurations: bool,
    /// Plugin `<dependencies>` must be declared in `<pluginManagement>`
    pub manage_dependencies: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            manage_versions: true,
            allow_unmanaged_project_versions: true,
            manage_configurations: true,
            manage_dependencies: true,
        }
    }
}

/// Which POMs may declare `<pluginManagement>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginManagementLocationConfig {
    /// Any POM with packaging `pom` may manage plugins
    pub allow_parent_poms: bool,
    /// `groupId:artifactId` of further POMs allowed to manage plugins
    pub plugin_managing_poms: Vec<String>,
}

impl Default for PluginManagementLocationConfig {
    fn default() -> Self {
        Self {
            allow_parent_poms: true,
            plugin_managing_poms: Vec::new(),
        }
    }
}
