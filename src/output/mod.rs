// Output formatting: terminal display and JSON reports.

pub mod json;
pub mod terminal;

use crate::text::WordSet;

/// Render a word set as `{a, b, c}`, or `{}` when empty.
pub fn format_words(words: &WordSet) -> String {
    let joined: Vec<&str> = words.iter().map(String::as_str).collect();
    format!("{{{}}}", joined.join(", "))
}

/// A `[====    ]` bar for a score in [0, 1].
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
