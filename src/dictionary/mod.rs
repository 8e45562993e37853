//! Guess recognition capability
//!
//! The validation gate treats "is this a real word" as a boolean oracle
//! behind the [`Dictionary`] trait, so the backend can be swapped (bundled
//! lexicon, custom word file) without touching the gate itself. A word the
//! backend does not know is simply not a real word; lookups never fail.

use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

use crate::wordlists;
use crate::wordlists::loader::load_from_file;

/// A boolean oracle for word recognition
pub trait Dictionary {
    /// Whether `word` is a recognized word
    ///
    /// `word` arrives normalized (trimmed, lowercased) from the gate.
    fn is_real_word(&self, word: &str) -> bool;
}

/// Word-set dictionary backend
///
/// Holds a set of recognized words. Construct from the embedded lexicon,
/// from a newline-delimited file, or from any iterator of words.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// The lexicon bundled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(wordlists::LEXICON.iter().copied())
    }

    /// Load a lexicon from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read; callers fall back to
    /// the embedded lexicon rather than aborting.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self {
            words: words.into_iter().collect(),
        })
    }

    /// Build a lexicon from any collection of words
    ///
    /// Entries are trimmed and lowercased so membership checks line up with
    /// the gate's normalized guesses.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Number of words in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for Lexicon {
    fn is_real_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
