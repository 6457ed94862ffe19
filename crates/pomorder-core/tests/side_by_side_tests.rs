//! Side-by-side rendering scenarios: fixed examples for each operation kind
//! plus the layout guarantees of the flattened text block.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{lines, split_rows};
use pomorder_core::config::RenderOptions;
use pomorder_core::diff::{
    build_edit_script, render, render_columns, render_with_options, EditOperation,
};

// ---------------------------------------------------------------------------
// Operation scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_identity_has_no_markers() {
    let seq = lines(&["modelVersion", "groupId", "artifactId"]);
    let script = build_edit_script(&seq, &seq);
    assert!(script.is_empty());

    let columns = render_columns(&seq, &script).unwrap();
    assert_eq!(columns.left, columns.right);
    assert_eq!(columns.left, seq);
    assert!(columns.is_unmarked());
}

#[test]
fn test_pure_insertion() {
    let actual = lines(&["a", "c"]);
    let required = lines(&["a", "b", "c"]);

    let script = build_edit_script(&actual, &required);
    assert_eq!(
        script,
        vec![EditOperation::Insert {
            at: 1,
            lines: lines(&["b"])
        }]
    );

    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["a", "", "c"]));
    assert_eq!(columns.right, lines(&["a", "+ b", "c"]));
}

#[test]
fn test_pure_deletion() {
    let actual = lines(&["a", "b", "c"]);
    let required = lines(&["a", "c"]);

    let script = build_edit_script(&actual, &required);
    assert_eq!(script, vec![EditOperation::Delete { at: 1, count: 1 }]);

    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["a", "- b", "c"]));
    assert_eq!(columns.right, lines(&["a", "", "c"]));
}

#[test]
fn test_replace_with_growth() {
    let actual = lines(&["x"]);
    let required = lines(&["y", "z"]);

    let script = build_edit_script(&actual, &required);
    assert_eq!(
        script,
        vec![EditOperation::Replace {
            at: 0,
            original_count: 1,
            lines: lines(&["y", "z"])
        }]
    );

    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["- x", ""]));
    assert_eq!(columns.right, lines(&["+ y", "+ z"]));
}

#[test]
fn test_replace_with_shrink() {
    let actual = lines(&["x", "y"]);
    let required = lines(&["z"]);

    let script = build_edit_script(&actual, &required);
    assert_eq!(
        script,
        vec![EditOperation::Replace {
            at: 0,
            original_count: 2,
            lines: lines(&["z"])
        }]
    );

    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["- x", "- y"]));
    assert_eq!(columns.right, lines(&["+ z", ""]));
}

#[test]
fn test_empty_actual_renders_only_insertions() {
    let required = lines(&["a", "b"]);
    let script = build_edit_script(&[], &required);
    let columns = render_columns(&[], &script).unwrap();
    assert_eq!(columns.left, lines(&["", ""]));
    assert_eq!(columns.right, lines(&["+ a", "+ b"]));
}

#[test]
fn test_empty_required_renders_only_deletions() {
    let actual = lines(&["a", "b"]);
    let script = build_edit_script(&actual, &[]);
    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["- a", "- b"]));
    assert_eq!(columns.right, lines(&["", ""]));
}

#[test]
fn test_both_empty_renders_empty_text() {
    assert_eq!(render(&[], &[]).unwrap(), "");
}

#[test]
fn test_hand_written_script_with_mixed_operations() {
    // a b c d e -> a X c e F
    let actual = lines(&["a", "b", "c", "d", "e"]);
    let script = vec![
        EditOperation::Replace {
            at: 1,
            original_count: 1,
            lines: lines(&["X"]),
        },
        EditOperation::Delete { at: 3, count: 1 },
        EditOperation::Insert {
            at: 5,
            lines: lines(&["F"]),
        },
    ];

    let columns = render_columns(&actual, &script).unwrap();
    assert_eq!(columns.left, lines(&["a", "- b", "c", "- d", "e", ""]));
    assert_eq!(columns.right, lines(&["a", "+ X", "c", "", "e", "+ F"]));
}

// ---------------------------------------------------------------------------
// Text layout
// ---------------------------------------------------------------------------

#[test]
fn test_separator_at_fixed_offset() {
    let actual = lines(&["packaging", "groupId", "artifactId", "dependencies"]);
    let required = lines(&["groupId", "artifactId", "packaging", "dependencies"]);
    let script = build_edit_script(&actual, &required);

    let text = render(&actual, &script).unwrap();
    for row in text.split('\n') {
        assert_eq!(row.find(" | "), Some(25), "misaligned row: {:?}", row);
        assert_eq!(row.chars().count(), 25 + 3 + 25);
    }
}

#[test]
fn test_no_trailing_newline() {
    let actual = lines(&["a", "c"]);
    let required = lines(&["a", "b", "c"]);
    let text = render(&actual, &build_edit_script(&actual, &required)).unwrap();
    assert!(!text.ends_with('\n'));
    assert_eq!(text.split('\n').count(), 3);
}

#[test]
fn test_text_matches_columns() {
    let actual = lines(&["a", "b", "c"]);
    let required = lines(&["a", "c"]);
    let script = build_edit_script(&actual, &required);

    let rows = split_rows(&render(&actual, &script).unwrap());
    assert_eq!(
        rows,
        vec![
            ("a".to_string(), "a".to_string()),
            ("- b".to_string(), String::new()),
            ("c".to_string(), "c".to_string()),
        ]
    );
}

#[test]
fn test_custom_layout() {
    let actual = lines(&["x"]);
    let required = lines(&["y"]);
    let options = RenderOptions::default()
        .with_column_width(4)
        .with_separator(" || ");
    let text =
        render_with_options(&actual, &build_edit_script(&actual, &required), &options).unwrap();
    assert_eq!(text, "- x  || + y ");
}

#[test]
fn test_multibyte_lines_pad_by_characters() {
    let actual = lines(&["ä"]);
    let options = RenderOptions::default().with_column_width(3);
    let text = render_with_options(&actual, &[], &options).unwrap();
    assert_eq!(text, "ä   | ä  ");
}
