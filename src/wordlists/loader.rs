//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased; blank lines are skipped. A missing or
/// unreadable file is a recoverable error, so callers can fall back to the
/// embedded lists.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// Embedded lists are already normalized, so this is a plain copy.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_copies_all_entries() {
        let input = &["silkworm", "notebook", "keyboard"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "silkworm");
        assert_eq!(words[1], "notebook");
        assert_eq!(words[2], "keyboard");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_missing_is_recoverable() {
        let result = load_from_file("no/such/wordlist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_embedded_root_words() {
        use crate::wordlists::ROOT_WORDS;

        let words = words_from_slice(ROOT_WORDS);
        assert_eq!(words.len(), ROOT_WORDS.len());
    }
}
