//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterState};
use colored::{ColoredString, Colorize};

/// Color one letter cell by its feedback state
#[must_use]
pub fn colored_cell(character: char, state: LetterState) -> ColoredString {
    let cell = format!(" {character} ");
    match state {
        LetterState::Correct => cell.black().on_green(),
        LetterState::Present => cell.black().on_yellow(),
        LetterState::Absent => cell.white().on_bright_black(),
        LetterState::Empty => cell.normal(),
    }
}

/// Format an evaluated attempt as one colored row
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    attempt
        .letters()
        .iter()
        .map(|l| colored_cell(l.character, l.state).to_string())
        .collect()
}

/// Emoji square for a letter state
#[must_use]
pub const fn share_square(state: LetterState) -> char {
    match state {
        LetterState::Correct => '🟩',
        LetterState::Present => '🟨',
        LetterState::Absent => '⬛',
        LetterState::Empty => '⬜',
    }
}

/// Emoji rendering of a finished board, one line per attempt
///
/// Reveals the color pattern but no letters, so it is safe to paste
/// anywhere.
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|attempt| {
            attempt
                .letters()
                .iter()
                .map(|l| share_square(l.state))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
