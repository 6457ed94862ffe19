//! Plugin management location rule.
//!
//! Only parent POMs (packaging `pom`) and an explicit list of POMs may
//! declare `<pluginManagement>`.

use crate::config::PluginManagementLocationConfig;
use crate::report::ErrorReport;
use crate::rules::plugin_config::BuildModel;
use crate::rules::RuleKind;

const PARENT_PACKAGING: &str = "pom";

/// Report `model` if it manages plugins without being allowed to.
pub fn check_plugin_management_location(
    model: &BuildModel,
    config: &PluginManagementLocationConfig,
) -> ErrorReport {
    let mut report = ErrorReport::new(RuleKind::PluginManagementLocation);

    if model.plugin_management.is_empty() {
        return report;
    }
    if config.allow_parent_poms && model.packaging == PARENT_PACKAGING {
        return report;
    }
    let coordinates = model.coordinates();
    if config.plugin_managing_poms.contains(&coordinates) {
        return report;
    }

    report.add_line(format!(
        "{} is not allowed to declare <pluginManagement>.",
        coordinates
    ));
    if config.allow_parent_poms {
        report.add_line("Plugins may be managed in parent POMs (packaging `pom`).");
    }
    if !config.plugin_managing_poms.is_empty() {
        report
            .add_line("Only these POMs are allowed to manage plugins:")
            .add_list(&config.plugin_managing_poms);
    }
    report
}
