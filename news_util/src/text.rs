use std::collections::BTreeSet;

use itertools::Itertools;

/// Number of normalized characters compared when detecting duplicate titles.
pub const TITLE_KEY_LENGTH: usize = 50;

/// Normalize a title into the key used for duplicate detection.
/// Lower-cases, drops everything but word characters and whitespace, collapses
/// whitespace runs and keeps the first [`TITLE_KEY_LENGTH`] characters.
pub fn title_key(title: &str) -> String {
    let stripped: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().join(" ").chars().take(TITLE_KEY_LENGTH).collect()
}

/// Cut `text` down to `max_chars` characters, appending `...` when anything was cut.
/// Blank input yields `None`.
pub fn preview(text: &str, max_chars: usize) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Some(format!("{}...", &text[..end])),
        None => Some(text.to_string()),
    }
}

/// Split a delimiter-joined field like `BTC|Trading|Market` into a set.
pub fn split_delimited(field: &str, delimiter: char) -> BTreeSet<String> {
    field
        .split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Empty strings become `None`.
pub fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
