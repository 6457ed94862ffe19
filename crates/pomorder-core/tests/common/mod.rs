/// Build an owned line sequence from string literals
#[allow(dead_code)]
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Split a rendered block back into (left, right) cells, trimming padding
#[allow(dead_code)]
pub fn split_rows(text: &str) -> Vec<(String, String)> {
    text.split('\n')
        .map(|row| {
            let (left, right) = row.split_once(" | ").unwrap_or((row, ""));
            (left.trim_end().to_string(), right.trim_end().to_string())
        })
        .collect()
}
