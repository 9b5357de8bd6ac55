//! Genedle guess session
//!
//! The client-side state machine for the Wordle-style game: accumulates a
//! bounded number of evaluated attempts, tracks per-key feedback, and
//! decides the terminal states. The oracle is constructor-injected so the
//! whole machine runs against a scripted substitute in tests.

use crate::core::{Attempt, KeyboardFeedback, LetterResult, LetterState};
use crate::oracle::{GameMode, GenedleOracle, Guess, GuessResult, OracleError, ValidGuess};
use tracing::warn;

/// Attempts allowed per session
pub const MAX_ATTEMPTS: usize = 5;

/// Message for a winning attempt
pub const WIN_MESSAGE: &str = "Geneius!";

/// Message for running out of attempts
pub const LOSS_MESSAGE: &str = "Game over";

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One Genedle game against an oracle
///
/// All mutation goes through the methods below; every state transition
/// runs to completion before the next event is processed. The `loading`
/// flag is set around the oracle call and gates every mutating operation,
/// so a call in flight can never interleave with input edits.
pub struct GenedleSession<O> {
    oracle: O,
    seed: u64,
    mode: GameMode,
    word_length: usize,
    input: Vec<char>,
    attempts: Vec<Attempt>,
    keyboard: KeyboardFeedback,
    status: GameStatus,
    message: Option<String>,
    loading: bool,
}

impl<O: GenedleOracle> GenedleSession<O> {
    /// Start a session for a seed, fetching the word length from the oracle
    ///
    /// Mode defaults to hard.
    ///
    /// # Errors
    /// Returns an error if the word length cannot be fetched.
    pub fn new(oracle: O, seed: u64) -> Result<Self, OracleError> {
        let word_length = oracle.word_length(seed)?;

        Ok(Self {
            oracle,
            seed,
            mode: GameMode::Hard,
            word_length,
            input: Vec::new(),
            attempts: Vec::new(),
            keyboard: KeyboardFeedback::new(),
            status: GameStatus::InProgress,
            message: None,
            loading: false,
        })
    }

    /// Override the guess-acceptance mode
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// Partial input as a string
    #[must_use]
    pub fn typed(&self) -> String {
        self.input.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Completed turns (equals recorded attempts)
    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn accepts_input(&self) -> bool {
        self.status == GameStatus::InProgress && !self.loading
    }

    /// Append one character to the partial input
    ///
    /// Accepted set: letters (normalized to upper case), digits, hyphen,
    /// period. Ignored while loading, once the game is over, when the row
    /// is full, and for any other character.
    pub fn append_char(&mut self, c: char) {
        if !self.accepts_input() || self.input.len() >= self.word_length {
            return;
        }

        let Some(c) = normalize_char(c) else {
            return;
        };

        self.input.push(c);
    }

    /// Delete the last character of the partial input
    ///
    /// Clears any displayed message; no-op on empty input.
    pub fn delete_char(&mut self) {
        if !self.accepts_input() {
            return;
        }

        self.message = None;
        self.input.pop();
    }

    /// Discard the whole partial input (line-mode helper)
    pub fn clear_input(&mut self) {
        if !self.accepts_input() {
            return;
        }

        self.message = None;
        self.input.clear();
    }

    /// Submit the current input to the oracle
    ///
    /// Length is not pre-checked here: the interface already refuses to
    /// grow the input past the word length, and an under-length guess is
    /// the oracle's call to reject. A rejected or failed submission
    /// mutates nothing beyond the message line.
    pub fn submit_attempt(&mut self) {
        if self.loading || self.status != GameStatus::InProgress {
            return;
        }

        let guess = Guess {
            word: self.input.clone(),
            session: self.seed,
            mode: self.mode,
        };

        self.loading = true;
        let verdict = self.oracle.validate(&guess);
        self.loading = false;

        match verdict {
            Err(err) => {
                warn!(seed = self.seed, "guess submission failed: {err}");
                self.message = Some(format!("Couldn't reach the oracle: {err}"));
            }
            Ok(GuessResult::Invalid(reason)) => {
                self.message = Some(reason.user_message().to_string());
            }
            Ok(GuessResult::Valid(valid)) => self.record_valid(&guess.word, &valid),
        }
    }

    fn record_valid(&mut self, word: &[char], valid: &ValidGuess) {
        let states: Vec<LetterState> = valid.result.iter().map(|&f| f.into()).collect();

        let attempt = match Attempt::from_feedback(word, &states) {
            Ok(attempt) => attempt,
            Err(err) => {
                warn!(seed = self.seed, "discarding verdict: {err}");
                self.message = Some("Something went wrong, try again".to_string());
                return;
            }
        };

        self.keyboard.observe(&attempt);
        self.attempts.push(attempt);
        self.input.clear();

        if valid.is_correct {
            self.status = GameStatus::Won;
            self.message = Some(WIN_MESSAGE.to_string());
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = Some(LOSS_MESSAGE.to_string());
        } else {
            self.message = None;
        }
    }

    /// Reinitialize for a seed, re-fetching the word length
    ///
    /// Mode reverts to hard; attempts, input, keyboard, and message all
    /// clear.
    ///
    /// # Errors
    /// Returns an error if the word length cannot be fetched; the session
    /// is left unchanged in that case.
    pub fn reset(&mut self, new_seed: u64) -> Result<(), OracleError> {
        let word_length = self.oracle.word_length(new_seed)?;

        self.seed = new_seed;
        self.mode = GameMode::Hard;
        self.word_length = word_length;
        self.input.clear();
        self.attempts.clear();
        self.keyboard.clear();
        self.status = GameStatus::InProgress;
        self.message = None;
        self.loading = false;

        Ok(())
    }

    /// The full board as `MAX_ATTEMPTS` rows of letter cells
    ///
    /// Evaluated attempts first, then the row being typed (padded with
    /// `Empty` cells), then blank rows. Pure function of state, shared by
    /// both front ends.
    #[must_use]
    pub fn board_rows(&self) -> Vec<Vec<LetterResult>> {
        let mut rows = Vec::with_capacity(MAX_ATTEMPTS);

        for attempt in &self.attempts {
            rows.push(attempt.letters().to_vec());
        }

        if rows.len() < MAX_ATTEMPTS && !self.is_over() {
            let mut row: Vec<LetterResult> = self
                .input
                .iter()
                .map(|&c| LetterResult::new(c, LetterState::Empty))
                .collect();
            row.resize(self.word_length, LetterResult::new(' ', LetterState::Empty));
            rows.push(row);
        }

        while rows.len() < MAX_ATTEMPTS {
            rows.push(vec![
                LetterResult::new(' ', LetterState::Empty);
                self.word_length
            ]);
        }

        rows
    }
}

fn normalize_char(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c.to_ascii_uppercase()),
        'A'..='Z' | '0'..='9' | '-' | '.' => Some(c),
        _ => None,
    }
}
