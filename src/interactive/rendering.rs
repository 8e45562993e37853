//! TUI rendering with ratatui
//!
//! Layout for the scramble game screen: root word and score up top, the
//! used-words list and session panel in the middle, the input field below,
//! and a modal alert popup for visible rejections.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::word_with_length;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Session panel
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_session_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, chunks[3]);

    // Alert popup on top of everything
    if app.alert.is_some() {
        render_alert(f, app);
    }
}

fn render_header<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let session = app.game.session();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            session.root_word().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" WORD SCRAMBLE ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_used_words<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .session()
        .used_words()
        .iter()
        .map(|word| ListItem::new(word_with_length(word)))
        .collect();

    let title = format!(" Words Found ({}) ", app.game.session().words_found());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_session_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let session = app.game.session();

    let mut content = vec![
        Line::from(vec![
            Span::raw("Score:       "),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Words found: {}", session.words_found())),
    ];

    if let Some(best) = session.best_word() {
        content.push(Line::from(vec![
            Span::raw("Best word:   "),
            Span::styled(best.to_string(), Style::default().fg(Color::Green)),
        ]));
    }

    content.push(Line::from(""));

    for message in &app.messages {
        let style = match message.style {
            MessageStyle::Info => Style::default().fg(Color::Gray),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        content.push(Line::from(Span::styled(message.text.clone(), style)));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled(
            app.input_buffer.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Enter your word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let status = Paragraph::new("Enter: submit  •  Ctrl-N: new game  •  Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn render_alert<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(50, 7, f.area());
    f.render_widget(Clear, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::raw(alert.message.clone())),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(popup, area);
}

/// Center a fixed-height popup horizontally within `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
