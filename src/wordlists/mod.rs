//! Word lists for the scramble game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access:
//! the root-word candidates a session starts from, and the lexicon used for
//! guess recognition.

mod embedded;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
