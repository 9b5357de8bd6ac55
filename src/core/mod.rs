//! Core domain types for the two games
//!
//! Pure, oracle-free types: letter feedback states, evaluated attempts,
//! the keyboard highlight reducer, and the daily seed derivation.

mod attempt;
mod keyboard;
mod letter;
mod seed;

pub use attempt::{Attempt, FeedbackMismatch};
pub use keyboard::KeyboardFeedback;
pub use letter::{LetterResult, LetterState};
pub use seed::{daily_seed, seed_for_date};
