//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::formatters::{score_line, word_with_length};
use crate::output::print_session_summary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary>(game: &mut Game<D>, root_words: &[String]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many real words as you can from the root word's letters.");
    println!("Each letter may be used once per occurrence; accepted words score");
    println!("their length in points.\n");
    println!("Commands: 'quit' to exit, 'new' for a new root word, 'words' to list finds\n");

    loop {
        let session = game.session();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Root word: {}    {}",
            session.root_word().to_uppercase().bright_yellow().bold(),
            score_line(session.score(), session.words_found())
        );
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Your word")?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                print_farewell(game);
                return Ok(());
            }
            "new" | "restart" => {
                game.restart(root_words);
                println!(
                    "\n🔄 New game! Root word is {}\n",
                    game.session().root_word().to_uppercase().bright_yellow().bold()
                );
            }
            "words" | "list" => {
                if game.session().used_words().is_empty() {
                    println!("\nNo words found yet.\n");
                } else {
                    println!();
                    for word in game.session().used_words() {
                        println!("  {}", word_with_length(word));
                    }
                    println!();
                }
            }
            _ => match game.submit(&input) {
                Ok(accepted) => {
                    println!(
                        "\n{} {} {}\n",
                        "✓".green().bold(),
                        accepted.word.bright_white().bold(),
                        format!("+{} points", accepted.added_score).green()
                    );
                }
                Err(rejection) if rejection.is_silent() => {
                    // Too short or the root word itself: no dialog, just move on
                }
                Err(rejection) => {
                    let title = rejection.title().unwrap_or("Rejected");
                    let message = rejection.message().unwrap_or_default();
                    println!(
                        "\n{} {}\n",
                        format!("✗ {title}:").red().bold(),
                        message.red()
                    );
                }
            },
        }
    }
}

fn print_farewell<D: Dictionary>(game: &Game<D>) {
    let session = game.session();

    println!("\n{}", "═".repeat(60).bright_cyan());
    print_session_summary(session);

    if let Some(best) = session.best_word() {
        println!("{} {}", "Best word:".bright_cyan(), best.bright_white().bold());
    }

    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n👋 Thanks for playing!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
