//! pomorder Core - ordering checks with side-by-side diff reports
//!
//! This crate provides the building blocks for pedantic ordering checks on
//! build descriptors, including:
//! - Edit-script construction between an actual and a required sequence
//! - Side-by-side rendering of an edit script into two aligned columns
//! - The canonical POM section order
//! - Rule evaluation (order rules, dependency and plugin configuration) into
//!   error reports
//! - Structured error and logging facilities

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod report;
pub mod rules;
pub mod sections;

#[doc(hidden)]
pub use pomorder_core_types as core_types;

// Re-export commonly used types
pub use config::{DependencyConfig, PluginConfig, PluginManagementLocationConfig, RenderOptions};
pub use diff::{build_edit_script, render, EditOperation, SideBySide};
pub use errors::{ExError, ExErrorKind, PomOrderError, Result};
pub use report::ErrorReport;
pub use rules::{enforce, Rule, RuleKind};
pub use sections::{OrderProvider, PomSection, PomSectionOrder};
