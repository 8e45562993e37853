//! Guess checking command
//!
//! Replays a sequence of guesses against a given root word and records the
//! verdict for each one.

use crate::dictionary::Dictionary;
use crate::game::{Accepted, Game, Rejection};

/// Configuration for a check run
pub struct CheckConfig {
    pub root_word: String,
    pub guesses: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root_word: String, guesses: Vec<String>) -> Self {
        Self { root_word, guesses }
    }
}

/// A single checked guess
pub struct CheckStep {
    /// The raw input as given
    pub input: String,
    /// What the gate decided
    pub verdict: Result<Accepted, Rejection>,
}

/// Result of checking a guess sequence
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    /// Final session score after all guesses
    pub score: usize,
}

impl CheckResult {
    /// Number of guesses that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps.iter().filter(|step| step.verdict.is_ok()).count()
    }
}

/// Run a guess sequence through a fresh session
///
/// Guesses are applied in order against the same session, so originality and
/// score accumulate exactly as they would in interactive play.
pub fn check_words<D: Dictionary>(config: CheckConfig, dictionary: D) -> CheckResult {
    let mut game = Game::with_root_word(&config.root_word, dictionary);

    let steps = config
        .guesses
        .iter()
        .map(|raw| CheckStep {
            input: raw.clone(),
            verdict: game.submit(raw),
        })
        .collect();

    CheckResult {
        root_word: game.session().root_word().to_string(),
        steps,
        score: game.session().score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["silk", "worm", "milk"])
    }

    #[test]
    fn check_applies_guesses_in_order() {
        let config = CheckConfig::new(
            "silkworm".to_string(),
            vec!["silk".to_string(), "silk".to_string(), "worm".to_string()],
        );

        let result = check_words(config, lexicon());

        assert_eq!(result.steps.len(), 3);
        assert!(result.steps[0].verdict.is_ok());
        assert_eq!(
            result.steps[1].verdict,
            Err(Rejection::AlreadyUsed),
            "second 'silk' must be unoriginal"
        );
        assert!(result.steps[2].verdict.is_ok());
        assert_eq!(result.score, 8);
        assert_eq!(result.accepted_count(), 2);
    }

    #[test]
    fn check_normalizes_root_word() {
        let config = CheckConfig::new("  SilkWorm ".to_string(), vec!["silk".to_string()]);
        let result = check_words(config, lexicon());

        assert_eq!(result.root_word, "silkworm");
        assert_eq!(result.score, 4);
    }

    #[test]
    fn check_with_no_guesses() {
        let config = CheckConfig::new("silkworm".to_string(), Vec::new());
        let result = check_words(config, lexicon());

        assert!(result.steps.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.accepted_count(), 0);
    }

    #[test]
    fn check_records_silent_rejections() {
        let config = CheckConfig::new(
            "silkworm".to_string(),
            vec!["xq".to_string(), "silkworm".to_string()],
        );
        let result = check_words(config, lexicon());

        assert_eq!(result.steps[0].verdict, Err(Rejection::TooShort));
        assert_eq!(result.steps[1].verdict, Err(Rejection::IsRootWord));
        assert_eq!(result.score, 0);
    }
}
