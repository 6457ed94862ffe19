//! Dependency configuration rule.
//!
//! Versions and exclusions of dependencies belong in `<dependencyManagement>`;
//! this rule lists the dependencies that declare them in place.

use crate::config::DependencyConfig;
use crate::report::ErrorReport;
use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};

/// Versions that refer to the project itself
const PROJECT_VERSIONS: [&str; 2] = ["${project.version}", "${version}"];

/// True for the version placeholders that refer to the project itself
pub(crate) fn is_project_version(version: &str) -> bool {
    PROJECT_VERSIONS.contains(&version)
}

/// A dependency as declared in a `<dependencies>` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            exclusions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }

    fn has_project_version(&self) -> bool {
        self.version.as_deref().is_some_and(is_project_version)
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}

/// Report dependencies that configure versions or exclusions in place.
pub fn check_dependency_configuration(
    dependencies: &[Dependency],
    config: &DependencyConfig,
) -> ErrorReport {
    let mut report = ErrorReport::new(RuleKind::DependencyConfiguration);

    if config.manage_versions {
        let versioned: Vec<&Dependency> = dependencies
            .iter()
            .filter(|d| d.version.is_some())
            .filter(|d| !(config.allow_unmanaged_project_versions && d.has_project_version()))
            .collect();
        if !versioned.is_empty() {
            report
                .add_line("Dependency versions have to be declared in <dependencyManagement>:")
                .add_list(versioned);
        }
    }

    if config.manage_exclusions {
        let excluding: Vec<&Dependency> = dependencies
            .iter()
            .filter(|d| !d.exclusions.is_empty())
            .collect();
        if !excluding.is_empty() {
            report
                .add_line("Dependency exclusions have to be declared in <dependencyManagement>:")
                .add_list(excluding);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_version() {
        assert_eq!(Dependency::new("g", "a").to_string(), "g:a");
        assert_eq!(
            Dependency::new("g", "a").with_version("1.0").to_string(),
            "g:a:1.0"
        );
    }

    #[test]
    fn test_project_version_detection() {
        assert!(Dependency::new("g", "a")
            .with_version("${project.version}")
            .has_project_version());
        assert!(Dependency::new("g", "a")
            .with_version("${version}")
            .has_project_version());
        assert!(!Dependency::new("g", "a")
            .with_version("1.0")
            .has_project_version());
    }

    #[test]
    fn test_json_defaults() {
        let dep: Dependency =
            serde_json::from_str(r#"{"groupId": "g", "artifactId": "a"}"#).unwrap();
        assert_eq!(dep, Dependency::new("g", "a"));
    }
}
