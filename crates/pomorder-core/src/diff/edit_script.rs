//! Edit-script construction and contract checks.
//!
//! The script is derived from an uncompacted Myers diff (via `similar`'s
//! hook API). Equal spans are dropped and touching insert/delete spans are
//! folded into one operation, so every emitted operation is separated from
//! the next by at least one unchanged line.

use crate::diff::model::EditOperation;
use crate::errors::{PomOrderError, Result};
use crate::{log_op_end, log_op_start};
use similar::algorithms::{myers, Capture, Replace};
use similar::DiffOp;
use std::time::Instant;

/// Compute the edit script transforming `actual` into `required`.
///
/// Operations come out in ascending `at` order and never overlap. Identical
/// inputs produce an empty script.
///
/// # Example
///
/// ```
/// use pomorder_core::diff::{build_edit_script, EditOperation};
///
/// let actual = vec!["a".to_string(), "c".to_string()];
/// let required = vec!["a".to_string(), "b".to_string(), "c".to_string()];
///
/// let script = build_edit_script(&actual, &required);
/// assert_eq!(
///     script,
///     vec![EditOperation::Insert { at: 1, lines: vec!["b".to_string()] }]
/// );
/// ```
pub fn build_edit_script(actual: &[String], required: &[String]) -> Vec<EditOperation> {
    let started = Instant::now();
    log_op_start!(
        "build_edit_script",
        actual_len = actual.len(),
        required_len = required.len()
    );

    let mut script: Vec<EditOperation> = Vec::new();
    for op in myers_ops(actual, required) {
        let Some(next) = to_edit_operation(&op, required) else {
            continue;
        };
        let merged = script.last().and_then(|last| last.merge_adjacent(&next));
        match merged {
            Some(merged) => {
                script.pop();
                script.push(merged);
            }
            None => script.push(next),
        }
    }

    debug_assert!(validate_edit_script(actual.len(), &script).is_ok());

    log_op_end!(
        "build_edit_script",
        duration_ms = started.elapsed().as_millis() as u64,
        ops_len = script.len()
    );
    script
}

/// Uncompacted Myers ops, in ascending position order.
fn myers_ops(actual: &[String], required: &[String]) -> Vec<DiffOp> {
    let mut hook = Replace::new(Capture::new());
    let outcome = myers::diff(
        &mut hook,
        actual,
        0..actual.len(),
        required,
        0..required.len(),
    );
    if let Err(never) = outcome {
        match never {}
    }
    hook.into_inner().into_ops()
}

fn to_edit_operation(op: &DiffOp, required: &[String]) -> Option<EditOperation> {
    match *op {
        DiffOp::Equal { .. } => None,
        DiffOp::Delete {
            old_index, old_len, ..
        } => EditOperation::from_parts(old_index, old_len, Vec::new()),
        DiffOp::Insert {
            old_index,
            new_index,
            new_len,
        } => EditOperation::from_parts(
            old_index,
            0,
            required[new_index..new_index + new_len].to_vec(),
        ),
        DiffOp::Replace {
            old_index,
            old_len,
            new_index,
            new_len,
        } => EditOperation::from_parts(
            old_index,
            old_len,
            required[new_index..new_index + new_len].to_vec(),
        ),
    }
}

/// Check that `script` is a well-formed edit script for a sequence of
/// `actual_len` lines.
///
/// # Errors
///
/// `ContractViolation` if an operation is empty, reaches past the end of the
/// actual sequence, starts before the previous operation ended, or carries a
/// line with an embedded newline.
pub fn validate_edit_script(actual_len: usize, script: &[EditOperation]) -> Result<()> {
    let mut previous_end = 0;
    for (op_index, op) in script.iter().enumerate() {
        let violation = |reason: String| PomOrderError::ContractViolation { op_index, reason };

        match op {
            EditOperation::Insert { lines, .. } if lines.is_empty() => {
                return Err(violation("insert carries no lines".to_string()));
            }
            EditOperation::Delete { count: 0, .. } => {
                return Err(violation("delete removes no lines".to_string()));
            }
            EditOperation::Replace {
                original_count,
                lines,
                ..
            } if *original_count == 0 || lines.is_empty() => {
                return Err(violation(
                    "replace must consume and produce at least one line".to_string(),
                ));
            }
            _ => {}
        }

        if op.at() < previous_end {
            return Err(violation(format!(
                "{} at {} overlaps previous operation ending at {}",
                op.kind_name(),
                op.at(),
                previous_end
            )));
        }
        if op.original_end() > actual_len {
            return Err(violation(format!(
                "{} spans {}..{} beyond actual length {}",
                op.kind_name(),
                op.at(),
                op.original_end(),
                actual_len
            )));
        }
        if op.revised_lines().iter().any(|line| line.contains('\n')) {
            return Err(violation("revised line contains a newline".to_string()));
        }

        previous_end = op.original_end();
    }
    Ok(())
}

/// Apply `script` to `actual` with plain splices, without display markers.
///
/// # Errors
///
/// `ContractViolation` if the script fails [`validate_edit_script`].
pub fn apply_edit_script(actual: &[String], script: &[EditOperation]) -> Result<Vec<String>> {
    validate_edit_script(actual.len(), script)?;

    let mut out = Vec::with_capacity(actual.len());
    let mut cursor = 0;
    for op in script {
        out.extend_from_slice(&actual[cursor..op.at()]);
        out.extend_from_slice(op.revised_lines());
        cursor = op.original_end();
    }
    out.extend_from_slice(&actual[cursor..]);
    Ok(out)
}
