//! Sequence-alignment diff.
//!
//! Compares an actual ordered sequence of lines with a required one and
//! renders the result as two index-aligned columns.
//!
//! ## Entry point
//!
//! ```
//! use pomorder_core::diff::{build_edit_script, render};
//!
//! let actual = vec!["x".to_string()];
//! let required = vec!["y".to_string(), "z".to_string()];
//!
//! let script = build_edit_script(&actual, &required);
//! let text = render(&actual, &script)?;
//! # Ok::<(), pomorder_core::PomOrderError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Alignment**: both columns always have the same number of rows.
//! - **Edit-script authority**: only rows touched by an operation get a
//!   `+`/`-` marker; untouched rows are never compared again.
//! - **No partial output**: a malformed script fails before any row is built.

pub mod edit_script;
pub mod model;
pub mod side_by_side;

pub use edit_script::{apply_edit_script, build_edit_script, validate_edit_script};
pub use model::{format_row, EditOperation, SideBySide, ADDED_MARKER, REMOVED_MARKER};
pub use side_by_side::{render, render_columns, render_with_options};
