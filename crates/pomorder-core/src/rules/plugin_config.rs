//! Plugin configuration rule.
//!
//! Plugin versions, configuration and plugin dependencies belong in
//! `<pluginManagement>`; this rule lists the plugins under `<plugins>` that
//! declare them in place.

use crate::config::PluginConfig;
use crate::report::ErrorReport;
use crate::rules::dependency_config::is_project_version;
use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};

/// A plugin as declared in `<plugins>` or `<pluginManagement>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Raw `<configuration>` block, kept opaque
    #[serde(default)]
    pub configuration: Option<serde_json::Value>,
    /// `groupId:artifactId` of the plugin's own dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Plugin {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            configuration: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    fn has_project_version(&self) -> bool {
        self.version.as_deref().is_some_and(is_project_version)
    }
}

impl std::fmt::Display for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}

/// Build section of a POM: identity plus `<plugins>` and `<pluginManagement>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildModel {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    #[serde(default)]
    pub plugin_management: Vec<Plugin>,
}

fn default_packaging() -> String {
    "jar".to_string()
}

impl BuildModel {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            packaging: default_packaging(),
            plugins: Vec::new(),
            plugin_management: Vec::new(),
        }
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn with_managed_plugin(mut self, plugin: Plugin) -> Self {
        self.plugin_management.push(plugin);
        self
    }

    /// `groupId:artifactId` of the POM
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// Report plugins that configure versions, configuration or dependencies in place.
pub fn check_plugin_configuration(plugins: &[Plugin], config: &PluginConfig) -> ErrorReport {
    let mut report = ErrorReport::new(RuleKind::PluginConfiguration);

    if config.manage_versions {
        let versioned: Vec<&Plugin> = plugins
            .iter()
            .filter(|p| p.version.is_some())
            .filter(|p| !(config.allow_unmanaged_project_versions && p.has_project_version()))
            .collect();
        if !versioned.is_empty() {
            report
                .add_line("Plugin versions have to be declared in <pluginManagement>:")
                .add_list(versioned);
        }
    }

    if config.manage_configurations {
        let configured: Vec<&Plugin> = plugins
            .iter()
            .filter(|p| p.configuration.is_some())
            .collect();
        if !configured.is_empty() {
            report
                .add_line("Plugin configuration has to be declared in <pluginManagement>:")
                .add_list(configured);
        }
    }

    if config.manage_dependencies {
        let with_deps: Vec<&Plugin> = plugins
            .iter()
            .filter(|p| !p.dependencies.is_empty())
            .collect();
        if !with_deps.is_empty() {
            report
                .add_line("Plugin dependencies have to be declared in <pluginManagement>:")
                .add_list(with_deps);
        }
    }

    report
}
