//! Rule evaluation.
//!
//! The rule set is closed, so evaluation is a plain `match` over [`Rule`].
//! Every rule produces an [`ErrorReport`]; only non-empty reports are
//! returned to the caller.

pub mod dependency_config;
pub mod order;
pub mod plugin_config;
pub mod plugin_location;

pub use dependency_config::{check_dependency_configuration, Dependency};
pub use order::{check_order, check_section_order};
pub use plugin_config::{check_plugin_configuration, BuildModel, Plugin};
pub use plugin_location::check_plugin_management_location;

use crate::config::{DependencyConfig, PluginConfig, PluginManagementLocationConfig, RenderOptions};
use crate::errors::Result;
use crate::report::ErrorReport;
use crate::sections::PomSectionOrder;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Identity of a rule, used to label reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    PomSectionOrder,
    ModuleOrder,
    DependencyOrder,
    DependencyManagementOrder,
    PluginManagementOrder,
    DependencyConfiguration,
    PluginConfiguration,
    PluginManagementLocation,
}

impl RuleKind {
    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            RuleKind::PomSectionOrder => "POM_SECTION_ORDER",
            RuleKind::ModuleOrder => "MODULE_ORDER",
            RuleKind::DependencyOrder => "DEPENDENCY_ORDER",
            RuleKind::DependencyManagementOrder => "DEPENDENCY_MANAGEMENT_ORDER",
            RuleKind::PluginManagementOrder => "PLUGIN_MANAGEMENT_ORDER",
            RuleKind::DependencyConfiguration => "DEPENDENCY_CONFIGURATION",
            RuleKind::PluginConfiguration => "PLUGIN_CONFIGURATION",
            RuleKind::PluginManagementLocation => "PLUGIN_MANAGEMENT_LOCATION",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::PomSectionOrder => "POM sections must be declared in the required order",
            RuleKind::ModuleOrder => "Modules must be declared in the required order",
            RuleKind::DependencyOrder => "Dependencies must be declared in the required order",
            RuleKind::DependencyManagementOrder => {
                "Managed dependencies must be declared in the required order"
            }
            RuleKind::PluginManagementOrder => {
                "Managed plugins must be declared in the required order"
            }
            RuleKind::DependencyConfiguration => {
                "Dependency versions and exclusions belong in <dependencyManagement>"
            }
            RuleKind::PluginConfiguration => {
                "Plugin versions, configuration and dependencies belong in <pluginManagement>"
            }
            RuleKind::PluginManagementLocation => {
                "Only designated POMs may declare <pluginManagement>"
            }
        }
    }

    /// First line of a report when the actual order differs
    pub fn violation_heading(&self) -> &'static str {
        match self {
            RuleKind::PomSectionOrder => "Wrong order of POM sections:",
            RuleKind::ModuleOrder => "Wrong order of modules:",
            RuleKind::DependencyOrder => "Wrong order of dependencies:",
            RuleKind::DependencyManagementOrder => {
                "Wrong order of dependencies in <dependencyManagement>:"
            }
            RuleKind::PluginManagementOrder => "Wrong order of plugins in <pluginManagement>:",
            RuleKind::DependencyConfiguration => "Dependency configuration violations:",
            RuleKind::PluginConfiguration => "Plugin configuration violations:",
            RuleKind::PluginManagementLocation => "Plugin management location violations:",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A rule together with the input it is checked against
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Compare an actual order against a required order; `kind` labels the report
    Order {
        kind: RuleKind,
        actual: Vec<String>,
        required: Vec<String>,
    },
    /// Compare declared POM sections against a section order
    SectionOrder {
        order: PomSectionOrder,
        actual: Vec<String>,
    },
    DependencyConfiguration {
        config: DependencyConfig,
        dependencies: Vec<Dependency>,
    },
    PluginConfiguration {
        config: PluginConfig,
        plugins: Vec<Plugin>,
    },
    PluginManagementLocation {
        config: PluginManagementLocationConfig,
        model: BuildModel,
    },
    /// Evaluate children in order
    Compound(Vec<Rule>),
}

/// Evaluate `rule` and return the non-empty reports in evaluation order.
///
/// # Errors
///
/// Propagates `ContractViolation` from the diff renderer; that is an
/// internal failure, distinct from a rule reporting violations.
pub fn enforce(rule: &Rule, options: &RenderOptions) -> Result<Vec<ErrorReport>> {
    let started = Instant::now();
    log_op_start!("enforce");

    let mut reports = Vec::new();
    match collect(rule, options, &mut reports) {
        Ok(()) => {
            log_op_end!(
                "enforce",
                duration_ms = started.elapsed().as_millis() as u64,
                reports_len = reports.len()
            );
            Ok(reports)
        }
        Err(err) => {
            log_op_error!(
                "enforce",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn collect(rule: &Rule, options: &RenderOptions, reports: &mut Vec<ErrorReport>) -> Result<()> {
    let report = match rule {
        Rule::Order {
            kind,
            actual,
            required,
        } => check_order(*kind, actual, required, options)?,
        Rule::SectionOrder { order, actual } => check_section_order(actual, order, options)?,
        Rule::DependencyConfiguration {
            config,
            dependencies,
        } => check_dependency_configuration(dependencies, config),
        Rule::PluginConfiguration { config, plugins } => {
            check_plugin_configuration(plugins, config)
        }
        Rule::PluginManagementLocation { config, model } => {
            check_plugin_management_location(model, config)
        }
        Rule::Compound(children) => {
            for child in children {
                collect(child, options, reports)?;
            }
            return Ok(());
        }
    };

    tracing::debug!(rule_id = report.rule.id(), violations = report.lines.len(), "rule evaluated");
    if !report.is_empty() {
        reports.push(report);
    }
    Ok(())
}
