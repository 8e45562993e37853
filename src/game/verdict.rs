//! Guess verdicts
//!
//! The outcome of submitting a guess: either it was accepted into the
//! session, or it was turned away with a [`Rejection`]. Two rejections are
//! silent (the input is simply not taken); the rest carry a title and
//! message for the presentation layer to show as a dialog.

use std::fmt;

/// A guess accepted into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word that was recorded
    pub word: String,
    /// Points the word added to the score (its length)
    pub added_score: usize,
}

/// Why a guess was turned away
///
/// Rules are checked in declaration order and the first failure wins, so a
/// guess that is both too short and unoriginal reports `TooShort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than 3 letters after normalization; rejected silently
    TooShort,
    /// Equals the root word itself; rejected silently
    IsRootWord,
    /// Already accepted earlier this session
    AlreadyUsed,
    /// Letters cannot all be drawn from the root word
    NotPossible {
        /// The root word the guess was checked against
        root_word: String,
    },
    /// Not a recognized dictionary word
    NotRecognized,
}

impl Rejection {
    /// Whether this rejection shows no dialog at all
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::TooShort | Self::IsRootWord)
    }

    /// Dialog title, or `None` for silent rejections
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::TooShort | Self::IsRootWord => None,
            Self::AlreadyUsed => Some("Word used already"),
            Self::NotPossible { .. } => Some("Word not possible"),
            Self::NotRecognized => Some("Word not recognized"),
        }
    }

    /// Dialog message, or `None` for silent rejections
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::TooShort | Self::IsRootWord => None,
            Self::AlreadyUsed => Some("Be more original".to_string()),
            Self::NotPossible { root_word } => {
                Some(format!("You can't spell that word from '{root_word}'!"))
            }
            Self::NotRecognized => Some("You can't just make them up, you know!".to_string()),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "word must be longer than 2 letters"),
            Self::IsRootWord => write!(f, "word is the root word itself"),
            Self::AlreadyUsed => write!(f, "word used already"),
            Self::NotPossible { root_word } => {
                write!(f, "word cannot be spelled from '{root_word}'")
            }
            Self::NotRecognized => write!(f, "word not recognized"),
        }
    }
}

impl std::error::Error for Rejection {}
