//! Word Scramble - CLI
//!
//! Terminal word-scramble game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{CheckConfig, check_words, run_simple},
    dictionary::Lexicon,
    game::Game,
    output::print_check_result,
    wordlists::{
        ROOT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell real words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary lexicon: 'embedded' (default) or path to a file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    lexicon: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (interactive game without TUI)
    Simple,

    /// Validate a sequence of guesses against a given root word
    Check {
        /// The root word to play against
        root_word: String,

        /// Guesses to validate, in order
        guesses: Vec<String>,
    },
}

/// Load the root word list based on the -w flag
///
/// - "embedded": the list bundled into the binary
/// - "<path>": load a custom newline-delimited list from file
fn load_root_words(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(ROOT_WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

/// Load the dictionary lexicon based on the -d flag
fn load_lexicon(lexicon_mode: &str) -> Result<Lexicon> {
    match lexicon_mode {
        "embedded" => Ok(Lexicon::embedded()),
        path => {
            Lexicon::from_file(path).with_context(|| format!("Failed to load lexicon {path}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root_words = load_root_words(&cli.wordlist)?;
    let lexicon = load_lexicon(&cli.lexicon)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(root_words, lexicon),
        Commands::Simple => run_simple_command(&root_words, lexicon),
        Commands::Check { root_word, guesses } => {
            run_check_command(&root_word, guesses, lexicon);
            Ok(())
        }
    }
}

fn run_play_command(root_words: Vec<String>, lexicon: Lexicon) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = Game::new(&root_words, lexicon);
    let app = App::new(game, root_words);
    run_tui(app)
}

fn run_simple_command(root_words: &[String], lexicon: Lexicon) -> Result<()> {
    let mut game = Game::new(root_words, lexicon);
    run_simple(&mut game, root_words).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(root_word: &str, guesses: Vec<String>, lexicon: Lexicon) {
    let config = CheckConfig::new(root_word.to_string(), guesses);
    let result = check_words(config, lexicon);
    print_check_result(&result);
}
