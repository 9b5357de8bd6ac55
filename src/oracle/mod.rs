//! The feedback oracle
//!
//! The games defer all domain logic to a remote validation service: corpus
//! membership, per-letter feedback, puzzle generation. The service is a
//! black box behind the two traits here, so the session state machines can
//! be driven by the real HTTP backend or by a scripted substitute in tests.

mod http;
mod protocol;
mod scripted;

pub use http::{DEFAULT_SERVER, HttpOracle};
pub use protocol::{
    GameMode, Guess, GuessResult, InvalidGuess, LetterFeedback, SpellingParams, SpellingPuzzle,
    ValidGuess,
};
pub use scripted::ScriptedOracle;

use thiserror::Error;

/// Failures talking to the oracle
///
/// These are all fatal to the attempt in flight and to nothing else: the
/// sessions surface a message and record no state.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("oracle returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed oracle response: {0}")]
    Malformed(String),

    #[error("oracle has no puzzle for seed {seed}")]
    Unavailable { seed: u64 },

    #[error("failed to construct http client: {0}")]
    Client(reqwest::Error),
}

/// Validation service for Genedle
pub trait GenedleOracle {
    /// Length of the hidden gene symbol for a seed
    ///
    /// # Errors
    /// Returns an error on transport failure or when the oracle cannot
    /// produce a word for the seed.
    fn word_length(&self, seed: u64) -> Result<usize, OracleError>;

    /// Submit a guess for evaluation
    ///
    /// # Errors
    /// Returns an error on transport failure or a malformed response. A
    /// rejected guess is NOT an error: it comes back as
    /// [`GuessResult::Invalid`].
    fn validate(&self, guess: &Guess) -> Result<GuessResult, OracleError>;
}

/// Validation service for Spelling Gene
pub trait SpellingOracle {
    /// Fetch the letter grid for a puzzle
    ///
    /// # Errors
    /// Returns an error on transport failure or when no puzzle could be
    /// generated for the parameters.
    fn fetch_puzzle(&self, params: &SpellingParams) -> Result<SpellingPuzzle, OracleError>;

    /// Ask whether a symbol is in the puzzle's answer set
    ///
    /// # Errors
    /// Returns an error on transport failure or a malformed response.
    fn check_symbol(&self, params: &SpellingParams, symbol: &str) -> Result<bool, OracleError>;
}
