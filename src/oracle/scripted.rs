//! Scripted stand-in for the remote oracle
//!
//! Returns queued verdicts in order and counts how often it was consulted,
//! so session tests can assert both on state transitions and on which
//! paths reached the oracle at all.

use super::protocol::{Guess, GuessResult, SpellingParams, SpellingPuzzle};
use super::{GenedleOracle, OracleError, SpellingOracle};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// In-memory oracle fed from scripts
///
/// An exhausted script answers `OracleError::Malformed`, which the
/// sessions treat like any other failed call.
#[derive(Default)]
pub struct ScriptedOracle {
    word_length: Option<usize>,
    puzzle: Option<SpellingPuzzle>,
    verdicts: RefCell<VecDeque<Result<GuessResult, OracleError>>>,
    checks: RefCell<VecDeque<Result<bool, OracleError>>>,
    validate_calls: Cell<usize>,
    check_calls: Cell<usize>,
}

impl ScriptedOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the word length reported for every seed
    #[must_use]
    pub fn with_word_length(mut self, length: usize) -> Self {
        self.word_length = Some(length);
        self
    }

    /// Fix the puzzle returned for every parameter set
    #[must_use]
    pub fn with_puzzle(mut self, puzzle: SpellingPuzzle) -> Self {
        self.puzzle = Some(puzzle);
        self
    }

    /// Queue the verdict for the next `validate` call
    pub fn push_verdict(&self, verdict: GuessResult) {
        self.verdicts.borrow_mut().push_back(Ok(verdict));
    }

    /// Queue a failure for the next `validate` call
    pub fn push_verdict_failure(&self, error: OracleError) {
        self.verdicts.borrow_mut().push_back(Err(error));
    }

    /// Queue the answer for the next `check_symbol` call
    pub fn push_check(&self, accepted: bool) {
        self.checks.borrow_mut().push_back(Ok(accepted));
    }

    /// Queue a failure for the next `check_symbol` call
    pub fn push_check_failure(&self, error: OracleError) {
        self.checks.borrow_mut().push_back(Err(error));
    }

    /// How many guesses reached `validate`
    #[must_use]
    pub fn validate_calls(&self) -> usize {
        self.validate_calls.get()
    }

    /// How many symbols reached `check_symbol`
    #[must_use]
    pub fn check_calls(&self) -> usize {
        self.check_calls.get()
    }
}

impl GenedleOracle for ScriptedOracle {
    fn word_length(&self, seed: u64) -> Result<usize, OracleError> {
        self.word_length.ok_or(OracleError::Unavailable { seed })
    }

    fn validate(&self, _guess: &Guess) -> Result<GuessResult, OracleError> {
        self.validate_calls.set(self.validate_calls.get() + 1);
        self.verdicts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Malformed("script exhausted".to_string())))
    }
}

impl SpellingOracle for ScriptedOracle {
    fn fetch_puzzle(&self, params: &SpellingParams) -> Result<SpellingPuzzle, OracleError> {
        self.puzzle
            .clone()
            .ok_or(OracleError::Unavailable { seed: params.seed })
    }

    fn check_symbol(&self, _params: &SpellingParams, _symbol: &str) -> Result<bool, OracleError> {
        self.check_calls.set(self.check_calls.get() + 1);
        self.checks
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Malformed("script exhausted".to_string())))
    }
}
