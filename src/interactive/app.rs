//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A pending alert dialog
///
/// Mirrors the title/message pair of a visible rejection; dismissed with
/// Enter (the OK button).
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Application state
pub struct App<D: Dictionary> {
    pub game: Game<D>,
    pub root_words: Vec<String>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(game: Game<D>, root_words: Vec<String>) -> Self {
        let mut app = Self {
            game,
            root_words,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Spell words from the root word's letters.",
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter to submit.", MessageStyle::Info);
        app
    }

    /// Submit the current input buffer as a guess
    ///
    /// On acceptance the buffer is cleared; on rejection it is kept so the
    /// player can edit it. Visible rejections raise an alert dialog, silent
    /// ones do nothing at all.
    pub fn submit_current(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.submit(&input) {
            Ok(accepted) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("{} (+{} points)", accepted.word, accepted.added_score),
                    MessageStyle::Success,
                );
            }
            Err(rejection) => {
                if let (Some(title), Some(message)) = (rejection.title(), rejection.message()) {
                    self.alert = Some(Alert {
                        title: title.to_string(),
                        message,
                    });
                }
            }
        }
    }

    /// Restart with a freshly chosen root word
    pub fn new_game(&mut self) {
        self.game.restart(&self.root_words);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!("New game! Root word is {}", self.game.session().root_word()),
            MessageStyle::Info,
        );
    }

    /// Dismiss the pending alert, if any
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.alert.is_some() {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter | KeyCode::Esc => {
                        app.dismiss_alert();
                    }
                    _ => {
                        // Modal alert: ignore everything else until dismissed
                    }
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        // Guesses can never be longer than the root word
                        if c.is_alphabetic()
                            && app.input_buffer.chars().count()
                                < app.game.session().root_word().chars().count()
                        {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
