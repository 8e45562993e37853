//! Display functions for command results

use super::formatters::word_with_length;
use crate::commands::CheckResult;
use crate::core::Session;
use colored::Colorize;

/// Print the result of checking guesses against a root word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.verdict {
            Ok(accepted) => {
                println!(
                    "  {} {} {}",
                    "✓".green().bold(),
                    accepted.word,
                    format!("+{}", accepted.added_score).green()
                );
            }
            Err(rejection) if rejection.is_silent() => {
                println!("  {} {} {}", "·".bright_black(), step.input, "(ignored)".bright_black());
            }
            Err(rejection) => {
                println!(
                    "  {} {} {}",
                    "✗".red().bold(),
                    step.input,
                    format!("({rejection})").red()
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Final score: {} ({} of {} guesses accepted)",
            result.score,
            result.accepted_count(),
            result.steps.len()
        )
        .bold()
    );
}

/// Print a summary of the session state
pub fn print_session_summary(session: &Session) {
    println!(
        "\n{} {}",
        "Root word:".bright_cyan(),
        session.root_word().to_uppercase().bright_yellow().bold()
    );
    println!(
        "{} {}",
        "Score:".bright_cyan(),
        session.score().to_string().bold()
    );

    if session.used_words().is_empty() {
        println!("{}", "No words found yet".bright_black());
    } else {
        println!("{}", "Words found:".bright_cyan());
        for word in session.used_words() {
            println!("  {}", word_with_length(word));
        }
    }
}
