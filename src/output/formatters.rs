//! Formatting utilities for terminal output

/// Format a word with its length annotation, e.g. "(4) silk"
#[must_use]
pub fn word_with_length(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}

/// Format the score line shown next to the root word
#[must_use]
pub fn score_line(score: usize, words_found: usize) -> String {
    let noun = if words_found == 1 { "word" } else { "words" };
    format!("Score: {score} ({words_found} {noun})")
}
