//! Text normalization.
//!
//! The final pipeline stage: collapses whitespace, strips characters
//! outside the allowed set, deduplicates terminal punctuation runs, and
//! drops short low-value sentences (navigation fragments like "Home").

use crate::patterns::{
    DISALLOWED_CHARS, REPEATED_EXCLAMATIONS, REPEATED_PERIODS, REPEATED_QUESTIONS,
    WHITESPACE_RUNS,
};

/// Sentence fragments at or below this trimmed length are dropped.
///
/// Known precision/recall trade-off: legitimate short sentences (short
/// quotes, exclamations) are discarded along with navigation fragments.
/// This is deliberate policy, not a bug.
const MIN_SENTENCE_LEN: usize = 10;

/// Normalize extracted body text.
///
/// Applied in order: whitespace collapsing, character filtering,
/// punctuation deduplication, short-sentence filtering. Returns an empty
/// string when nothing of value remains.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = DISALLOWED_CHARS.replace_all(&text, "");
    let text = REPEATED_PERIODS.replace_all(&text, ".");
    let text = REPEATED_EXCLAMATIONS.replace_all(&text, "!");
    let text = REPEATED_QUESTIONS.replace_all(&text, "?");

    // Split into sentences on periods and drop short fragments.
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .collect();

    sentences.join(". ").trim().to_string()
}
