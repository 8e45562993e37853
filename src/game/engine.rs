//! Main game engine
//!
//! Owns the session and runs each guess through the validation gate.

use rand::prelude::IndexedRandom;

use super::verdict::{Accepted, Rejection};
use crate::core::{LetterPool, Session};
use crate::dictionary::Dictionary;

/// Fixed fallback root word, used when the candidate list is empty
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Minimum guess length; shorter inputs are silently ignored
const MIN_GUESS_LEN: usize = 3;

/// The scramble game
///
/// Generic over the [`Dictionary`] capability so the recognition backend can
/// be substituted freely (bundled lexicon in the binary, a stub in tests).
pub struct Game<D: Dictionary> {
    dictionary: D,
    session: Session,
}

impl<D: Dictionary> Game<D> {
    /// Start a game with a root word chosen uniformly at random
    ///
    /// Falls back to [`DEFAULT_ROOT_WORD`] when `root_words` is empty rather
    /// than failing.
    #[must_use]
    pub fn new(root_words: &[String], dictionary: D) -> Self {
        Self {
            dictionary,
            session: Session::new(pick_root_word(root_words)),
        }
    }

    /// Start a game against a specific root word
    ///
    /// Used by one-shot commands and tests; the root word is normalized the
    /// same way guesses are.
    #[must_use]
    pub fn with_root_word(root_word: &str, dictionary: D) -> Self {
        Self {
            dictionary,
            session: Session::new(root_word.trim().to_lowercase()),
        }
    }

    /// The current session state
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Discard the session and start over with a freshly chosen root word
    ///
    /// Score resets to 0 and the used-words history is cleared.
    pub fn restart(&mut self, root_words: &[String]) {
        self.session = Session::new(pick_root_word(root_words));
    }

    /// Submit a guess
    ///
    /// The raw input is trimmed and lowercased, then checked against five
    /// rules with short-circuit evaluation; the first failing rule decides
    /// the rejection:
    ///
    /// 1. longer than 2 letters (silent rejection otherwise)
    /// 2. not the root word itself (silent rejection otherwise)
    /// 3. not already used this session
    /// 4. letters drawable from the root word's letter multiset
    /// 5. recognized by the dictionary
    ///
    /// On acceptance the word is recorded at the front of the history and
    /// its length is added to the score. Rejections never mutate state.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] describing the first rule the guess failed.
    pub fn submit(&mut self, raw_input: &str) -> Result<Accepted, Rejection> {
        let answer = raw_input.trim().to_lowercase();

        if answer.chars().count() < MIN_GUESS_LEN {
            return Err(Rejection::TooShort);
        }

        if answer == self.session.root_word() {
            return Err(Rejection::IsRootWord);
        }

        if self.session.contains(&answer) {
            return Err(Rejection::AlreadyUsed);
        }

        if !LetterPool::new(self.session.root_word()).can_spell(&answer) {
            return Err(Rejection::NotPossible {
                root_word: self.session.root_word().to_string(),
            });
        }

        if !self.dictionary.is_real_word(&answer) {
            return Err(Rejection::NotRecognized);
        }

        let added_score = self.session.accept(answer.clone());
        Ok(Accepted {
            word: answer,
            added_score,
        })
    }
}

/// Choose a root word uniformly at random
///
/// Falls back to [`DEFAULT_ROOT_WORD`] when the list is empty.
#[must_use]
pub fn pick_root_word(root_words: &[String]) -> String {
    root_words
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["silk", "worm", "milk", "work", "rows", "cat"])
    }

    fn silkworm_game() -> Game<Lexicon> {
        Game::with_root_word("silkworm", lexicon())
    }

    #[test]
    fn accepts_valid_guess() {
        let mut game = silkworm_game();

        let accepted = game.submit("silk").unwrap();
        assert_eq!(accepted.word, "silk");
        assert_eq!(accepted.added_score, 4);
        assert_eq!(game.session().used_words(), &["silk"]);
        assert_eq!(game.session().score(), 4);
    }

    #[test]
    fn accepted_words_go_to_the_front() {
        let mut game = silkworm_game();
        game.submit("silk").unwrap();
        game.submit("worm").unwrap();

        assert_eq!(game.session().used_words(), &["worm", "silk"]);
        assert_eq!(game.session().score(), 8);
    }

    #[test]
    fn rejects_short_guess_silently() {
        let mut game = silkworm_game();

        assert_eq!(game.submit("xq"), Err(Rejection::TooShort));
        assert_eq!(game.submit(""), Err(Rejection::TooShort));
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn rejects_root_word_silently() {
        let mut game = silkworm_game();

        let rejection = game.submit("silkworm").unwrap_err();
        assert_eq!(rejection, Rejection::IsRootWord);
        assert!(rejection.is_silent());
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn rejects_reused_word() {
        let mut game = silkworm_game();
        game.submit("silk").unwrap();

        assert_eq!(game.submit("silk"), Err(Rejection::AlreadyUsed));
        assert_eq!(game.session().score(), 4);
        assert_eq!(game.session().words_found(), 1);
    }

    #[test]
    fn rejects_infeasible_letters() {
        let mut game = silkworm_game();

        // Only one 'k' is available in silkworm
        assert_eq!(
            game.submit("silkk"),
            Err(Rejection::NotPossible {
                root_word: "silkworm".to_string()
            })
        );
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn rejects_unrecognized_word() {
        let mut game = silkworm_game();

        // Spellable from the letters but not in the dictionary
        assert_eq!(game.submit("wilms"), Err(Rejection::NotRecognized));
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn rule_order_short_circuits() {
        let mut game = silkworm_game();
        game.submit("silk").unwrap();

        // A reused word reports AlreadyUsed even though it is still feasible
        assert_eq!(game.submit("silk"), Err(Rejection::AlreadyUsed));
        // Feasibility is checked before realness: "cat" is in the dictionary
        // but none of its letters come from silkworm
        assert!(matches!(
            game.submit("cat"),
            Err(Rejection::NotPossible { .. })
        ));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let mut game = silkworm_game();

        let accepted = game.submit("  SiLk  ").unwrap();
        assert_eq!(accepted.word, "silk");

        // " Cat " and "cat" are the same word for originality purposes
        let mut game = Game::with_root_word("cataract", Lexicon::from_words(["cat"]));
        game.submit(" Cat ").unwrap();
        assert_eq!(game.submit("cat"), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut game = silkworm_game();

        let first = game.submit("silkk").unwrap_err();
        let session_after_first = game.session().clone();
        let second = game.submit("silkk").unwrap_err();

        assert_eq!(first, second);
        assert_eq!(game.session(), &session_after_first);
    }

    #[test]
    fn score_matches_used_word_lengths() {
        let mut game = silkworm_game();
        for guess in ["silk", "worm", "milk", "silkk", "xq", "work"] {
            let _ = game.submit(guess);
        }

        let expected: usize = game
            .session()
            .used_words()
            .iter()
            .map(|word| word.chars().count())
            .sum();
        assert_eq!(game.session().score(), expected);
    }

    #[test]
    fn end_to_end_silkworm_scenario() {
        let mut game = silkworm_game();

        // silk → accepted
        game.submit("silk").unwrap();
        assert_eq!(game.session().used_words(), &["silk"]);
        assert_eq!(game.session().score(), 4);

        // silk again → already used, score unchanged
        assert_eq!(game.submit("silk"), Err(Rejection::AlreadyUsed));
        assert_eq!(game.session().score(), 4);

        // the root word itself → silent, score unchanged
        let rejection = game.submit("silkworm").unwrap_err();
        assert!(rejection.is_silent());
        assert_eq!(game.session().score(), 4);

        // silkk → not possible (one 'k'), score unchanged
        assert!(matches!(
            game.submit("silkk"),
            Err(Rejection::NotPossible { .. })
        ));
        assert_eq!(game.session().score(), 4);

        // xq → silently too short, score unchanged
        assert_eq!(game.submit("xq"), Err(Rejection::TooShort));
        assert_eq!(game.session().score(), 4);
    }

    #[test]
    fn new_game_falls_back_on_empty_list() {
        let game = Game::new(&[], lexicon());
        assert_eq!(game.session().root_word(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn new_game_picks_from_the_list() {
        let root_words = vec!["notebook".to_string(), "keyboard".to_string()];
        let game = Game::new(&root_words, lexicon());
        assert!(root_words.contains(&game.session().root_word().to_string()));
    }

    #[test]
    fn restart_resets_session() {
        let root_words = vec!["silkworm".to_string()];
        let mut game = Game::new(&root_words, lexicon());
        game.submit("silk").unwrap();
        assert_eq!(game.session().score(), 4);

        game.restart(&root_words);
        assert_eq!(game.session().score(), 0);
        assert!(game.session().used_words().is_empty());
    }

    #[test]
    fn with_root_word_normalizes() {
        let game = Game::with_root_word("  SilkWorm ", lexicon());
        assert_eq!(game.session().root_word(), "silkworm");
    }

    #[test]
    fn pick_root_word_empty_falls_back() {
        assert_eq!(pick_root_word(&[]), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn pick_root_word_uses_the_list() {
        let root_words = vec!["notebook".to_string()];
        assert_eq!(pick_root_word(&root_words), "notebook");
    }
}
