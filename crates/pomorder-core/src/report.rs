//! Error report collected by a rule.
//!
//! A report is the sink for rendered diffs and violation messages. It has no
//! structure beyond an ordered list of text lines under a rule heading.

use crate::config::RenderOptions;
use crate::diff::{format_row, SideBySide};
use crate::rules::RuleKind;
use serde::Serialize;

/// Ordered violation messages for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub rule: RuleKind,
    pub lines: Vec<String>,
}

impl ErrorReport {
    pub fn new(rule: RuleKind) -> Self {
        Self {
            rule,
            lines: Vec::new(),
        }
    }

    /// Append one message line
    pub fn add_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append each item as an indented list entry
    pub fn add_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: std::fmt::Display,
    {
        for item in items {
            self.lines.push(format!("  {}", item));
        }
        self
    }

    /// Append a side-by-side diff under a title row.
    ///
    /// The title row and a divider use the same column layout as the diff so
    /// the separator lines up through the whole block.
    pub fn add_diff(
        &mut self,
        left_title: &str,
        right_title: &str,
        columns: &SideBySide,
        options: &RenderOptions,
    ) -> &mut Self {
        self.lines.push(format_row(left_title, right_title, options));
        let rule = "-".repeat(options.column_width);
        self.lines.push(format_row(&rule, &rule, options));
        if columns.rows() > 0 {
            self.lines.push(columns.to_text(options));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rule {}: {}", self.rule.id(), self.rule.description())?;
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        assert!(ErrorReport::new(RuleKind::ModuleOrder).is_empty());
    }

    #[test]
    fn test_add_list_indents_items() {
        let mut report = ErrorReport::new(RuleKind::DependencyConfiguration);
        report.add_line("heading").add_list(["a", "b"]);
        assert_eq!(report.lines, vec!["heading", "  a", "  b"]);
    }

    #[test]
    fn test_display_starts_with_rule_heading() {
        let mut report = ErrorReport::new(RuleKind::PomSectionOrder);
        report.add_line("oops");
        let text = report.to_string();
        assert!(text.starts_with("Rule POM_SECTION_ORDER:"));
        assert!(text.ends_with("oops"));
    }

    #[test]
    fn test_add_diff_aligns_title_with_rows() {
        let options = RenderOptions::default().with_column_width(5);
        let columns = SideBySide {
            left: vec!["a".to_string()],
            right: vec!["+ b".to_string()],
        };
        let mut report = ErrorReport::new(RuleKind::ModuleOrder);
        report.add_diff("Act", "Req", &columns, &options);
        assert_eq!(report.lines[0], "Act   | Req  ");
        assert_eq!(report.lines[1], "----- | -----");
        assert_eq!(report.lines[2], "a     | + b  ");
    }
}
