//! Edit-script and display-buffer types.
//!
//! Positions in an [`EditOperation`] are always expressed in the original,
//! unshifted coordinates of the actual sequence.

use crate::config::RenderOptions;
use serde::{Deserialize, Serialize};

/// Marker prefixed to rows that appear only in the required sequence
pub const ADDED_MARKER: &str = "+";

/// Marker prefixed to rows that appear only in the actual sequence
pub const REMOVED_MARKER: &str = "-";

/// One step of an edit script transforming the actual sequence into the required one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditOperation {
    /// `lines` appear in the required sequence at `at` with no actual counterpart
    Insert { at: usize, lines: Vec<String> },
    /// `count` actual lines starting at `at` have no required counterpart
    Delete { at: usize, count: usize },
    /// `original_count` actual lines starting at `at` become `lines`
    Replace {
        at: usize,
        original_count: usize,
        lines: Vec<String>,
    },
}

impl EditOperation {
    /// Build the narrowest operation covering `original_count` actual lines
    /// replaced by `lines`.
    ///
    /// Returns `None` when both sides are empty.
    pub fn from_parts(at: usize, original_count: usize, lines: Vec<String>) -> Option<Self> {
        match (original_count, lines.is_empty()) {
            (0, true) => None,
            (0, false) => Some(EditOperation::Insert { at, lines }),
            (count, true) => Some(EditOperation::Delete { at, count }),
            (original_count, false) => Some(EditOperation::Replace {
                at,
                original_count,
                lines,
            }),
        }
    }

    /// Position in the actual sequence
    pub fn at(&self) -> usize {
        match self {
            EditOperation::Insert { at, .. }
            | EditOperation::Delete { at, .. }
            | EditOperation::Replace { at, .. } => *at,
        }
    }

    /// Number of actual lines this operation consumes
    pub fn original_count(&self) -> usize {
        match self {
            EditOperation::Insert { .. } => 0,
            EditOperation::Delete { count, .. } => *count,
            EditOperation::Replace { original_count, .. } => *original_count,
        }
    }

    /// First actual position after the consumed span
    pub fn original_end(&self) -> usize {
        self.at() + self.original_count()
    }

    /// Lines this operation contributes to the required sequence
    pub fn revised_lines(&self) -> &[String] {
        match self {
            EditOperation::Insert { lines, .. } | EditOperation::Replace { lines, .. } => lines,
            EditOperation::Delete { .. } => &[],
        }
    }

    /// Short name used in logs and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            EditOperation::Insert { .. } => "insert",
            EditOperation::Delete { .. } => "delete",
            EditOperation::Replace { .. } => "replace",
        }
    }

    /// Apply `other` after `self` when the two touch in original coordinates
    ///
    /// Returns `None` if the operations are not adjacent.
    pub(crate) fn merge_adjacent(&self, other: &EditOperation) -> Option<EditOperation> {
        if self.original_end() != other.at() {
            return None;
        }
        let mut lines = self.revised_lines().to_vec();
        lines.extend_from_slice(other.revised_lines());
        EditOperation::from_parts(
            self.at(),
            self.original_count() + other.original_count(),
            lines,
        )
    }
}

/// Two index-aligned display buffers.
///
/// Row `i` of `left` (actual) pairs with row `i` of `right` (required).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideBySide {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl SideBySide {
    /// Number of rendered rows
    pub fn rows(&self) -> usize {
        self.left.len().max(self.right.len())
    }

    /// True when no row carries an added or removed marker
    pub fn is_unmarked(&self) -> bool {
        let marked = |row: &String| {
            row.starts_with(&format!("{} ", ADDED_MARKER))
                || row.starts_with(&format!("{} ", REMOVED_MARKER))
        };
        !self.left.iter().any(marked) && !self.right.iter().any(marked)
    }

    /// Flatten into the paired-column text block.
    ///
    /// Rows are joined with `\n`; there is no trailing newline.
    pub fn to_text(&self, options: &RenderOptions) -> String {
        (0..self.rows())
            .map(|i| {
                let left = self.left.get(i).map(String::as_str).unwrap_or("");
                let right = self.right.get(i).map(String::as_str).unwrap_or("");
                format_row(left, right, options)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pad both cells to the column width and join them with the separator.
pub fn format_row(left: &str, right: &str, options: &RenderOptions) -> String {
    let width = options.column_width;
    format!(
        "{:<width$}{}{:<width$}",
        left,
        options.separator,
        right,
        width = width
    )
}

/// Prefix a line with a marker and a single space
pub(crate) fn marked(marker: &str, line: &str) -> String {
    format!("{} {}", marker, line)
}
