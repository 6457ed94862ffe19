//! Order rules: compare an actual order against a required one.

use crate::config::RenderOptions;
use crate::diff::{build_edit_script, render_columns};
use crate::errors::Result;
use crate::report::ErrorReport;
use crate::rules::RuleKind;
use crate::sections::OrderProvider;

/// Column title above the actual order
pub const ACTUAL_TITLE: &str = "Actual Order";
/// Column title above the required order
pub const REQUIRED_TITLE: &str = "Required Order";

/// Check `actual` against `required` and describe the difference.
///
/// The report is empty when the orders match.
///
/// # Errors
///
/// `ContractViolation` if the renderer rejects the computed edit script.
pub fn check_order(
    kind: RuleKind,
    actual: &[String],
    required: &[String],
    options: &RenderOptions,
) -> Result<ErrorReport> {
    let mut report = ErrorReport::new(kind);

    let script = build_edit_script(actual, required);
    if script.is_empty() {
        return Ok(report);
    }

    let columns = render_columns(actual, &script)?;
    report
        .add_line(kind.violation_heading())
        .add_diff(ACTUAL_TITLE, REQUIRED_TITLE, &columns, options);
    Ok(report)
}

/// Check the sections declared by a POM against `order`.
///
/// Only sections that are present take part: the required sequence is
/// `order` restricted to the names found in `actual`.
pub fn check_section_order<P>(
    actual: &[String],
    order: &P,
    options: &RenderOptions,
) -> Result<ErrorReport>
where
    P: OrderProvider + ?Sized,
{
    let required = order.order_of(actual);
    check_order(RuleKind::PomSectionOrder, actual, &required, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::PomSectionOrder;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matching_order_gives_empty_report() {
        let seq = lines(&["a", "b"]);
        let report =
            check_order(RuleKind::ModuleOrder, &seq, &seq, &RenderOptions::default()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_mismatch_report_layout() {
        let actual = lines(&["b", "a"]);
        let required = lines(&["a", "b"]);
        let report = check_order(
            RuleKind::ModuleOrder,
            &actual,
            &required,
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(report.lines[0], "Wrong order of modules:");
        assert!(report.lines[1].starts_with(ACTUAL_TITLE));
        assert!(report.lines[1].contains(REQUIRED_TITLE));
        assert_eq!(report.lines.len(), 4);
    }

    #[test]
    fn test_section_order_ignores_absent_sections() {
        let actual = lines(&["groupId", "artifactId", "modelVersion"]);
        let report =
            check_section_order(&actual, &PomSectionOrder::canonical(), &RenderOptions::default())
                .unwrap();
        assert!(!report.is_empty());
        assert_eq!(report.rule, RuleKind::PomSectionOrder);

        let sorted = lines(&["modelVersion", "groupId", "artifactId"]);
        let report =
            check_section_order(&sorted, &PomSectionOrder::canonical(), &RenderOptions::default())
                .unwrap();
        assert!(report.is_empty());
    }

    struct Alphabetical;

    impl OrderProvider for Alphabetical {
        fn order(&self) -> Vec<String> {
            lines(&["alpha", "beta", "gamma"])
        }
    }

    #[test]
    fn test_section_order_accepts_any_provider() {
        let actual = lines(&["gamma", "alpha"]);
        let report = check_section_order(&actual, &Alphabetical, &RenderOptions::default()).unwrap();
        assert_eq!(report.lines[0], "Wrong order of POM sections:");
    }
}
