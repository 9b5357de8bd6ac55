//! Spelling Gene TUI application state and logic

use crate::oracle::SpellingOracle;
use crate::session::SpellingSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// TUI wrapper around a Spelling Gene session
pub struct SpellingApp<O> {
    pub session: SpellingSession<O>,
    pub should_quit: bool,
}

impl<O: SpellingOracle> SpellingApp<O> {
    #[must_use]
    pub fn new(session: SpellingSession<O>) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.session.submit();
            }
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Delete => {
                self.session.clear_input();
            }
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            _ => {}
        }
    }
}

/// Run the Spelling Gene TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_spelling<O: SpellingOracle>(app: SpellingApp<O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, O: SpellingOracle>(
    terminal: &mut Terminal<B>,
    mut app: SpellingApp<O>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::spelling_ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{ScriptedOracle, SpellingParams, SpellingPuzzle};

    fn app() -> SpellingApp<ScriptedOracle> {
        let oracle = ScriptedOracle::new()
            .with_puzzle(SpellingPuzzle::new(vec!['B', 'R', 'C', 'A'], 'K'));
        let session = SpellingSession::new(oracle, SpellingParams::for_seed(20_277)).unwrap();
        SpellingApp::new(session)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_feed_the_session() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Char('k')));
        app.handle_key(press(KeyCode::Char('z'))); // not in the grid
        assert_eq!(app.session.typed(), "BK");
    }

    #[test]
    fn delete_clears_the_whole_input() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Char('r')));
        app.handle_key(press(KeyCode::Delete));
        assert_eq!(app.session.typed(), "");
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
