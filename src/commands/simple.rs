//! Simple interactive CLI mode
//!
//! Line-based Genedle without the TUI: type a whole symbol, get a colored
//! row back.

use crate::oracle::GenedleOracle;
use crate::output::formatters::{colored_row, share_grid};
use crate::session::{GameStatus, GenedleSession, MAX_ATTEMPTS};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// oracle cannot be reached for a restart.
pub fn run_simple<O: GenedleOracle>(session: &mut GenedleSession<O>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Genedle - Guess the Gene Symbol              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Today's gene symbol has {} characters. You get {} attempts.",
        session.word_length(),
        MAX_ATTEMPTS
    );
    println!("Letters, digits, '-' and '.' are all fair game.\n");
    println!("Commands: 'quit' to exit, 'new' to restart this puzzle\n");

    loop {
        print_board(session);

        let input = get_user_input(&format!(
            "Guess {}/{} ({} chars)",
            session.turn() + 1,
            MAX_ATTEMPTS,
            session.word_length()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let seed = session.seed();
                session.reset(seed).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        session.clear_input();
        for c in input.chars() {
            session.append_char(c);
        }
        session.submit_attempt();

        if let Some(message) = session.message() {
            match session.status() {
                GameStatus::InProgress => println!("\n  {}\n", message.yellow()),
                GameStatus::Won | GameStatus::Lost => {}
            }
        }

        if session.status() != GameStatus::InProgress {
            print_board(session);
            print_outcome(session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    let seed = session.seed();
                    session.reset(seed).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn print_board<O: GenedleOracle>(session: &GenedleSession<O>) {
    if session.attempts().is_empty() {
        return;
    }

    println!();
    for attempt in session.attempts() {
        println!("  {}", colored_row(attempt));
    }
    println!();
}

fn print_outcome<O: GenedleOracle>(session: &GenedleSession<O>) {
    println!("{}", "═".repeat(64).bright_cyan());

    match session.status() {
        GameStatus::Won => {
            println!(
                "{}",
                format!("  🧬 Geneius! Solved in {} guesses!", session.turn())
                    .bright_green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!("  ❌ Game over - out of attempts after {}", session.turn())
                    .red()
                    .bold()
            );
        }
        GameStatus::InProgress => {}
    }

    println!("{}", "═".repeat(64).bright_cyan());
    println!("\nShare your result:\n");
    println!(
        "Genedle {} {}/{}",
        session.seed(),
        if session.status() == GameStatus::Won {
            session.turn().to_string()
        } else {
            "X".to_string()
        },
        MAX_ATTEMPTS
    );
    println!("{}\n", share_grid(session.attempts()));
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
