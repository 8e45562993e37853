//! The scramble game itself
//!
//! The engine owns the session state and applies the validation gate; the
//! verdict types describe what happened to each guess.

mod engine;
mod verdict;

pub use engine::{DEFAULT_ROOT_WORD, Game, pick_root_word};
pub use verdict::{Accepted, Rejection};
