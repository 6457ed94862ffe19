//! Side-by-side renderer.
//!
//! Both buffers start as copies of the actual sequence. Operations are
//! applied in order while `offset` tracks how many rows have been inserted
//! so far, translating original positions into buffer indices. Rows that no
//! operation touches keep their original, unmarked content on both sides.

use crate::config::RenderOptions;
use crate::diff::edit_script::validate_edit_script;
use crate::diff::model::{marked, EditOperation, SideBySide, ADDED_MARKER, REMOVED_MARKER};
use crate::errors::{PomOrderError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Render `script` against `actual` into two aligned buffers.
///
/// # Errors
///
/// - `InvalidLine` if an actual line contains a newline
/// - `ContractViolation` if the script is out of bounds, overlapping or
///   degenerate; nothing is rendered in that case
pub fn render_columns(actual: &[String], script: &[EditOperation]) -> Result<SideBySide> {
    let started = Instant::now();
    log_op_start!(
        "render_columns",
        actual_len = actual.len(),
        ops_len = script.len()
    );

    match build_columns(actual, script) {
        Ok(columns) => {
            log_op_end!(
                "render_columns",
                duration_ms = started.elapsed().as_millis() as u64,
                rows = columns.rows()
            );
            Ok(columns)
        }
        Err(err) => {
            log_op_error!(
                "render_columns",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Render `script` against `actual` into the paired-column text block using
/// the default layout (25-character columns joined by `" | "`).
///
/// # Example
///
/// ```
/// use pomorder_core::diff::{build_edit_script, render};
///
/// let actual = vec!["a".to_string(), "c".to_string()];
/// let required = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let text = render(&actual, &build_edit_script(&actual, &required)).unwrap();
///
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.lines().nth(1).unwrap().ends_with("| + b                      "));
/// ```
pub fn render(actual: &[String], script: &[EditOperation]) -> Result<String> {
    render_with_options(actual, script, &RenderOptions::default())
}

/// Same as [`render`] with an explicit layout.
pub fn render_with_options(
    actual: &[String],
    script: &[EditOperation],
    options: &RenderOptions,
) -> Result<String> {
    Ok(render_columns(actual, script)?.to_text(options))
}

fn build_columns(actual: &[String], script: &[EditOperation]) -> Result<SideBySide> {
    if let Some(index) = actual.iter().position(|line| line.contains('\n')) {
        return Err(PomOrderError::InvalidLine {
            index,
            reason: "line contains a newline".to_string(),
        });
    }
    validate_edit_script(actual.len(), script)?;

    let mut left = actual.to_vec();
    let mut right = actual.to_vec();
    let mut offset = 0;

    for (op_index, op) in script.iter().enumerate() {
        let position = offset + op.at();
        match op {
            EditOperation::Insert { lines, .. } => {
                insert_marked(&mut right, position, ADDED_MARKER, lines);
                offset += insert_empty(&mut left, position, lines.len());
            }
            EditOperation::Replace {
                original_count,
                lines,
                ..
            } => {
                let change_size = (*original_count).max(lines.len());
                mark_removed(&mut left, position, *original_count, op_index)?;
                let inserted = insert_empty(
                    &mut left,
                    position + original_count,
                    change_size - original_count,
                );
                insert_empty(&mut right, position + original_count, inserted);
                set_marked(&mut right, position, ADDED_MARKER, lines, op_index)?;
                offset += inserted;
                clear(
                    &mut right,
                    offset + op.at() + lines.len(),
                    change_size - lines.len(),
                );
            }
            EditOperation::Delete { count, .. } => {
                mark_removed(&mut left, position, *count, op_index)?;
                clear(&mut right, position, *count);
            }
        }
    }

    debug_assert_eq!(left.len(), right.len());
    Ok(SideBySide { left, right })
}

/// Insert `count` empty rows at `index`, returning how many were inserted.
fn insert_empty(rows: &mut Vec<String>, index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    rows.splice(index..index, std::iter::repeat(String::new()).take(count));
    count
}

fn insert_marked(rows: &mut Vec<String>, index: usize, marker: &str, lines: &[String]) {
    rows.splice(index..index, lines.iter().map(|line| marked(marker, line)));
}

fn mark_removed(
    rows: &mut [String],
    index: usize,
    count: usize,
    op_index: usize,
) -> Result<()> {
    let span = rows
        .get_mut(index..index + count)
        .ok_or_else(|| out_of_range(op_index, index, count))?;
    for row in span {
        *row = marked(REMOVED_MARKER, row);
    }
    Ok(())
}

fn set_marked(
    rows: &mut [String],
    index: usize,
    marker: &str,
    lines: &[String],
    op_index: usize,
) -> Result<()> {
    let span = rows
        .get_mut(index..index + lines.len())
        .ok_or_else(|| out_of_range(op_index, index, lines.len()))?;
    for (row, line) in span.iter_mut().zip(lines) {
        *row = marked(marker, line);
    }
    Ok(())
}

/// Blank `count` rows from `index`, growing the buffer when it is too short.
fn clear(rows: &mut Vec<String>, index: usize, count: usize) {
    for target in index..index + count {
        match rows.get_mut(target) {
            Some(row) => row.clear(),
            None => rows.push(String::new()),
        }
    }
}

fn out_of_range(op_index: usize, index: usize, count: usize) -> PomOrderError {
    PomOrderError::ContractViolation {
        op_index,
        reason: format!("rows {}..{} fall outside the display buffer", index, index + count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_script_leaves_columns_identical() {
        let actual = lines(&["a", "b"]);
        let columns = render_columns(&actual, &[]).unwrap();
        assert_eq!(columns.left, actual);
        assert_eq!(columns.right, actual);
        assert!(columns.is_unmarked());
    }

    #[test]
    fn test_multi_line_insert_keeps_order() {
        let actual = lines(&["a"]);
        let script = vec![EditOperation::Insert {
            at: 1,
            lines: lines(&["b", "c"]),
        }];
        let columns = render_columns(&actual, &script).unwrap();
        assert_eq!(columns.left, lines(&["a", "", ""]));
        assert_eq!(columns.right, lines(&["a", "+ b", "+ c"]));
    }

    #[test]
    fn test_offset_carries_across_operations() {
        // a b c -> x a c d
        let actual = lines(&["a", "b", "c"]);
        let script = vec![
            EditOperation::Insert {
                at: 0,
                lines: lines(&["x"]),
            },
            EditOperation::Delete { at: 1, count: 1 },
            EditOperation::Insert {
                at: 3,
                lines: lines(&["d"]),
            },
        ];
        let columns = render_columns(&actual, &script).unwrap();
        assert_eq!(columns.left, lines(&["", "a", "- b", "c", ""]));
        assert_eq!(columns.right, lines(&["+ x", "a", "", "c", "+ d"]));
    }

    #[test]
    fn test_replace_growth_shifts_later_operations() {
        // a b c -> x y b
        let actual = lines(&["a", "b", "c"]);
        let script = vec![
            EditOperation::Replace {
                at: 0,
                original_count: 1,
                lines: lines(&["x", "y"]),
            },
            EditOperation::Delete { at: 2, count: 1 },
        ];
        let columns = render_columns(&actual, &script).unwrap();
        assert_eq!(columns.left, lines(&["- a", "", "b", "- c"]));
        assert_eq!(columns.right, lines(&["+ x", "+ y", "b", ""]));
    }

    #[test]
    fn test_invalid_script_renders_nothing() {
        let actual = lines(&["a"]);
        let script = vec![EditOperation::Delete { at: 0, count: 5 }];
        assert!(matches!(
            render_columns(&actual, &script),
            Err(PomOrderError::ContractViolation { op_index: 0, .. })
        ));
    }

    #[test]
    fn test_newline_in_actual_is_rejected() {
        let actual = lines(&["a\nb"]);
        assert!(matches!(
            render_columns(&actual, &[]),
            Err(PomOrderError::InvalidLine { index: 0, .. })
        ));
    }

    #[test]
    fn test_clear_extends_short_buffer() {
        let mut rows = lines(&["a"]);
        clear(&mut rows, 0, 3);
        assert_eq!(rows, lines(&["", "", ""]));
    }
}
