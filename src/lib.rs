//! Genedle
//!
//! Terminal client for the Genedle and Spelling Gene daily gene-symbol
//! word games. All domain logic (corpus membership, scoring, per-letter
//! feedback) lives behind the remote oracle; this crate owns the session
//! state machines and their terminal presentation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use genedle::core::daily_seed;
//! use genedle::oracle::{HttpOracle, OracleError};
//! use genedle::session::GenedleSession;
//!
//! # fn main() -> Result<(), OracleError> {
//! let oracle = HttpOracle::new("http://localhost:3000")?;
//! let mut session = GenedleSession::new(oracle, daily_seed())?;
//!
//! for c in "TP53".chars() {
//!     session.append_char(c);
//! }
//! session.submit_attempt();
//! println!("turn {} of 5", session.turn());
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// The feedback oracle and its wire protocol
pub mod oracle;

// Game session state machines
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interfaces
pub mod interactive;
