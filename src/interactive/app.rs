//! Genedle TUI application state and logic

use crate::oracle::GenedleOracle;
use crate::session::GenedleSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// TUI wrapper around a Genedle session
pub struct GenedleApp<O> {
    pub session: GenedleSession<O>,
    /// Presentation-level notice shown instead of the session message
    /// (currently only a failed restart)
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl<O: GenedleOracle> GenedleApp<O> {
    #[must_use]
    pub fn new(session: GenedleSession<O>) -> Self {
        Self {
            session,
            notice: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.session.submit_attempt();
            }
            KeyCode::Backspace => {
                self.session.delete_char();
            }
            // Once the game is over, letters stop being input
            KeyCode::Char('q' | 'Q') if self.session.is_over() => {
                self.should_quit = true;
            }
            KeyCode::Char('r' | 'R') if self.session.is_over() => {
                self.restart();
            }
            KeyCode::Char(c) => {
                self.session.append_char(c);
            }
            _ => {}
        }
    }

    /// Replay the current seed's puzzle
    fn restart(&mut self) {
        let seed = self.session.seed();
        if let Err(err) = self.session.reset(seed) {
            self.notice = Some(format!("Couldn't restart: {err}"));
        }
    }
}

/// Run the Genedle TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_genedle<O: GenedleOracle>(app: GenedleApp<O>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, O: GenedleOracle>(
    terminal: &mut Terminal<B>,
    mut app: GenedleApp<O>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::genedle_ui(f, &app))?;

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
