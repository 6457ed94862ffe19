//! Canonical POM section order and order providers.

use crate::errors::PomOrderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supplies a required order of names.
pub trait OrderProvider {
    fn order(&self) -> Vec<String>;

    /// Restrict the required order to the names `present` in an artifact.
    ///
    /// A POM only declares some sections; the order check compares against
    /// the required order of those, not of every known name.
    fn order_of(&self, present: &[String]) -> Vec<String> {
        self.order()
            .into_iter()
            .filter(|name| present.contains(name))
            .collect()
    }
}

/// Top-level sections of a Maven POM, declared in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PomSection {
    ModelVersion,
    Prerequisites,
    Parent,
    GroupId,
    ArtifactId,
    Version,
    Packaging,
    Name,
    Description,
    Url,
    Licenses,
    Organization,
    InceptionYear,
    CiManagement,
    MailingLists,
    IssueManagement,
    Developers,
    Contributors,
    Scm,
    Repositories,
    PluginRepositories,
    DistributionManagement,
    Modules,
    Properties,
    DependencyManagement,
    Dependencies,
    Build,
    Reporting,
    Profiles,
}

impl PomSection {
    /// Every section in canonical order
    pub const ALL: [PomSection; 29] = [
        PomSection::ModelVersion,
        PomSection::Prerequisites,
        PomSection::Parent,
        PomSection::GroupId,
        PomSection::ArtifactId,
        PomSection::Version,
        PomSection::Packaging,
        PomSection::Name,
        PomSection::Description,
        PomSection::Url,
        PomSection::Licenses,
        PomSection::Organization,
        PomSection::InceptionYear,
        PomSection::CiManagement,
        PomSection::MailingLists,
        PomSection::IssueManagement,
        PomSection::Developers,
        PomSection::Contributors,
        PomSection::Scm,
        PomSection::Repositories,
        PomSection::PluginRepositories,
        PomSection::DistributionManagement,
        PomSection::Modules,
        PomSection::Properties,
        PomSection::DependencyManagement,
        PomSection::Dependencies,
        PomSection::Build,
        PomSection::Reporting,
        PomSection::Profiles,
    ];

    /// XML element name of the section
    pub fn section_name(&self) -> &'static str {
        match self {
            PomSection::ModelVersion => "modelVersion",
            PomSection::Prerequisites => "prerequisites",
            PomSection::Parent => "parent",
            PomSection::GroupId => "groupId",
            PomSection::ArtifactId => "artifactId",
            PomSection::Version => "version",
            PomSection::Packaging => "packaging",
            PomSection::Name => "name",
            PomSection::Description => "description",
            PomSection::Url => "url",
            PomSection::Licenses => "licenses",
            PomSection::Organization => "organization",
            PomSection::InceptionYear => "inceptionYear",
            PomSection::CiManagement => "ciManagement",
            PomSection::MailingLists => "mailingLists",
            PomSection::IssueManagement => "issueManagement",
            PomSection::Developers => "developers",
            PomSection::Contributors => "contributors",
            PomSection::Scm => "scm",
            PomSection::Repositories => "repositories",
            PomSection::PluginRepositories => "pluginRepositories",
            PomSection::DistributionManagement => "distributionManagement",
            PomSection::Modules => "modules",
            PomSection::Properties => "properties",
            PomSection::DependencyManagement => "dependencyManagement",
            PomSection::Dependencies => "dependencies",
            PomSection::Build => "build",
            PomSection::Reporting => "reporting",
            PomSection::Profiles => "profiles",
        }
    }

    /// Look a section up by its XML element name
    pub fn from_name(name: &str) -> Option<PomSection> {
        PomSection::ALL
            .iter()
            .copied()
            .find(|section| section.section_name() == name)
    }
}

impl std::fmt::Display for PomSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section_name())
    }
}

impl FromStr for PomSection {
    type Err = PomOrderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PomSection::from_name(name).ok_or_else(|| PomOrderError::UnknownSection {
            name: name.to_string(),
        })
    }
}

/// Required-order provider for POM sections.
///
/// Prioritized sections come first, in the given order; every other section
/// follows in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomSectionOrder {
    priorities: Vec<PomSection>,
}

impl PomSectionOrder {
    /// Canonical order with no priorities
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Move `priorities` to the front; duplicates after the first are ignored
    pub fn with_priorities(priorities: &[PomSection]) -> Self {
        let mut unique: Vec<PomSection> = Vec::with_capacity(priorities.len());
        for section in priorities {
            if !unique.contains(section) {
                unique.push(*section);
            }
        }
        Self { priorities: unique }
    }

    pub fn sections(&self) -> Vec<PomSection> {
        let mut ordered = self.priorities.clone();
        ordered.extend(
            PomSection::ALL
                .iter()
                .filter(|section| !self.priorities.contains(section)),
        );
        ordered
    }
}

impl OrderProvider for PomSectionOrder {
    fn order(&self) -> Vec<String> {
        self.sections()
            .into_iter()
            .map(|section| section.section_name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_starts_and_ends() {
        let order = PomSectionOrder::canonical().order();
        assert_eq!(order.len(), 29);
        assert_eq!(order.first().map(String::as_str), Some("modelVersion"));
        assert_eq!(order.last().map(String::as_str), Some("profiles"));
    }

    #[test]
    fn test_from_name_round_trips_every_section() {
        for section in PomSection::ALL {
            assert_eq!(PomSection::from_name(section.section_name()), Some(section));
        }
        assert_eq!(PomSection::from_name("nope"), None);
    }

    #[test]
    fn test_parse_unknown_section() {
        assert_eq!("scm".parse::<PomSection>(), Ok(PomSection::Scm));
        assert!(matches!(
            "pom".parse::<PomSection>(),
            Err(PomOrderError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_priorities_move_to_front() {
        let order =
            PomSectionOrder::with_priorities(&[PomSection::Dependencies, PomSection::GroupId])
                .sections();
        assert_eq!(order[0], PomSection::Dependencies);
        assert_eq!(order[1], PomSection::GroupId);
        assert_eq!(order[2], PomSection::ModelVersion);
        assert_eq!(order.len(), 29);
    }

    #[test]
    fn test_order_of_keeps_only_present_sections() {
        let present = vec![
            "dependencies".to_string(),
            "artifactId".to_string(),
            "groupId".to_string(),
        ];
        assert_eq!(
            PomSectionOrder::canonical().order_of(&present),
            vec!["groupId", "artifactId", "dependencies"]
        );
    }

    #[test]
    fn test_serde_uses_element_names() {
        let json = serde_json::to_string(&PomSection::DependencyManagement).unwrap();
        assert_eq!(json, "\"dependencyManagement\"");
    }
}
