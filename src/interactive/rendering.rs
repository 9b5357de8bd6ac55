//! TUI rendering with ratatui
//!
//! Pure function-of-state views for both games: board grid, on-screen
//! keyboard, letter grid, found list.

use super::app::GenedleApp;
use super::spelling_app::SpellingApp;
use crate::core::LetterState;
use crate::oracle::{GenedleOracle, SpellingOracle};
use crate::session::{GameStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// On-screen keyboard rows (the accepted Genedle character set)
const KEY_ROWS: [&str; 4] = ["1234567890-.", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn cell_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Empty => Style::default().fg(Color::White),
    }
}

/// Main Genedle UI rendering function
pub fn genedle_ui<O: GenedleOracle>(f: &mut Frame, app: &GenedleApp<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Board + keyboard
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], "🧬 GENEDLE - Guess the Gene Symbol");

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_keyboard(f, app, main_chunks[1]);

    render_genedle_message(f, app, chunks[2]);
    render_genedle_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<O: GenedleOracle>(f: &mut Frame, app: &GenedleApp<O>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in app.session.board_rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in &row {
            spans.push(Span::styled(
                format!(" {} ", cell.character),
                cell_style(cell.state),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard<O: GenedleOracle>(f: &mut Frame, app: &GenedleApp<O>, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for key in row.chars() {
                let style = keyboard
                    .state_of(key)
                    .map_or_else(|| Style::default().fg(Color::White), cell_style);
                spans.push(Span::styled(key.to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(panel, area);
}

fn render_genedle_message<O: GenedleOracle>(f: &mut Frame, app: &GenedleApp<O>, area: Rect) {
    let (text, color) = match (app.notice.as_deref(), app.session.message()) {
        (Some(notice), _) => (notice, Color::Red),
        (None, Some(message)) => {
            let color = match app.session.status() {
                GameStatus::Won => Color::Green,
                GameStatus::Lost => Color::Red,
                GameStatus::InProgress => Color::Yellow,
            };
            (message, color)
        }
        (None, None) => ("", Color::White),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(message, area);
}

fn render_genedle_status<O: GenedleOracle>(f: &mut Frame, app: &GenedleApp<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let seed = Paragraph::new(format!("Seed: {}", app.session.seed()))
        .alignment(Alignment::Center);
    f.render_widget(seed, chunks[0]);

    let mode = Paragraph::new(format!("Mode: {}", app.session.mode()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let turn = Paragraph::new(format!(
        "Turn: {}/{}",
        app.session.turn(),
        MAX_ATTEMPTS
    ))
    .alignment(Alignment::Center);
    f.render_widget(turn, chunks[2]);

    let help_text = if app.session.is_over() {
        "r: Replay | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

/// Main Spelling Gene UI rendering function
pub fn spelling_ui<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Letter grid
            Constraint::Length(3), // Input
            Constraint::Min(8),    // Found list
            Constraint::Length(3), // Message
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], "🧬 SPELLING GENE - Build Gene Symbols");
    render_letters(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_found(f, app, chunks[3]);
    render_spelling_message(f, app, chunks[4]);
    render_spelling_status(f, app, chunks[5]);
}

fn render_letters<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>, area: Rect) {
    let puzzle = app.session.puzzle();

    let mut spans = Vec::new();
    let (left, right) = puzzle
        .outer_letters()
        .split_at(puzzle.outer_letters().len() / 2);

    for &letter in left {
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default().fg(Color::White),
        ));
    }
    // Every symbol must use the highlighted center letter
    spans.push(Span::styled(
        format!("[{}]", puzzle.center_letter()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    for &letter in right {
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default().fg(Color::White),
        ));
    }

    let letters = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(letters, area);
}

fn render_input<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>, area: Rect) {
    let input = Paragraph::new(app.session.typed())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your Symbol ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(input, area);
}

fn render_found<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .found()
        .iter()
        .map(|symbol| ListItem::new(format!("  {symbol}")))
        .collect();

    let title = format!(
        " Found: {} | Score: {} ",
        app.session.found().len(),
        app.session.score()
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_spelling_message<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>, area: Rect) {
    let message = Paragraph::new(app.session.message().unwrap_or(""))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(message, area);
}

fn render_spelling_status<O: SpellingOracle>(f: &mut Frame, app: &SpellingApp<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let seed = Paragraph::new(format!("Seed: {}", app.session.params().seed))
        .alignment(Alignment::Center);
    f.render_widget(seed, chunks[0]);

    let min_length = Paragraph::new(format!("Min length: {}", app.session.params().min_length))
        .alignment(Alignment::Center);
    f.render_widget(min_length, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Del: Clear | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
