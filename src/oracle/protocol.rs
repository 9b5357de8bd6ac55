//! Wire types for the oracle's HTTP API
//!
//! Shapes mirror the backend exactly: snake_case discriminants, a
//! `type`/`data` envelope around guess verdicts, and single-character
//! strings for word letters.

use crate::core::LetterState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Guess-acceptance policy, enforced server-side
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Normal,
    #[default]
    Hard,
}

impl GameMode {
    /// Parse a mode name from the CLI, defaulting to hard
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            _ => Self::Hard,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A submitted Genedle guess
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Guess {
    pub word: Vec<char>,
    pub session: u64,
    pub mode: GameMode,
}

/// Oracle verdict for a submitted guess
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GuessResult {
    Invalid(InvalidGuess),
    Valid(ValidGuess),
}

/// Rejection reasons; the guess is not recorded for any of these
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum InvalidGuess {
    InternalError(String),
    NotEnoughLetters,
    TooManyLetters,
    InvalidLetter,
    NotInCorpus,
}

impl InvalidGuess {
    /// Human-readable message shown in the message line
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotEnoughLetters => "Not enough letters",
            Self::TooManyLetters => "Too many letters",
            Self::InvalidLetter => "Invalid letter",
            Self::NotInCorpus => "Not a known gene symbol",
            Self::InternalError(_) => "Something went wrong, try again",
        }
    }
}

/// Per-letter evaluation of an accepted guess
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ValidGuess {
    pub is_correct: bool,
    pub result: Vec<LetterFeedback>,
}

/// The oracle's three-state letter classification
///
/// The client-side fourth state (`Empty`) never crosses the wire.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl From<LetterFeedback> for LetterState {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Correct => Self::Correct,
            LetterFeedback::Present => Self::Present,
            LetterFeedback::Absent => Self::Absent,
        }
    }
}

/// Parameters identifying one Spelling Gene puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellingParams {
    pub seed: u64,
    pub min_length: usize,
    pub min_symbols: usize,
    pub num_letters: u8,
}

impl SpellingParams {
    /// Standard daily puzzle: 7 letters, 4-letter minimum, at least 10 symbols
    #[must_use]
    pub const fn for_seed(seed: u64) -> Self {
        Self {
            seed,
            min_length: 4,
            min_symbols: 10,
            num_letters: 7,
        }
    }
}

/// Letter grid as the oracle sends it
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct RawPuzzle {
    pub(crate) outer_letters: Vec<String>,
    pub(crate) center_letter: String,
}

/// A Spelling Gene letter grid
///
/// Every valid symbol uses only these letters and must contain the center
/// letter. The oracle signals generation failure with an empty grid, which
/// the conversion from [`RawPuzzle`] rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingPuzzle {
    outer_letters: Vec<char>,
    center_letter: char,
}

impl SpellingPuzzle {
    /// Build a puzzle from its letters
    ///
    /// Used directly by tests; production code converts from [`RawPuzzle`].
    #[must_use]
    pub fn new(outer_letters: Vec<char>, center_letter: char) -> Self {
        Self {
            outer_letters,
            center_letter,
        }
    }

    #[inline]
    #[must_use]
    pub fn outer_letters(&self) -> &[char] {
        &self.outer_letters
    }

    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.center_letter
    }

    /// Whether a character is usable in this puzzle
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        character == self.center_letter || self.outer_letters.contains(&character)
    }
}

impl TryFrom<RawPuzzle> for SpellingPuzzle {
    type Error = String;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        let center_letter = raw
            .center_letter
            .chars()
            .next()
            .ok_or_else(|| "puzzle has no center letter".to_string())?;

        let mut outer_letters = Vec::with_capacity(raw.outer_letters.len());
        for letter in &raw.outer_letters {
            let c = letter
                .chars()
                .next()
                .ok_or_else(|| "puzzle has an empty outer letter".to_string())?;
            outer_letters.push(c);
        }

        Ok(Self {
            outer_letters,
            center_letter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_serializes_like_the_backend_expects() {
        let guess = Guess {
            word: vec!['T', 'P', '5', '3'],
            session: 739_000,
            mode: GameMode::Hard,
        };

        let json = serde_json::to_value(&guess).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": ["T", "P", "5", "3"],
                "session": 739_000,
                "mode": "hard",
            })
        );
    }

    #[test]
    fn valid_verdict_parses() {
        let verdict: GuessResult = serde_json::from_str(
            r#"{"type":"valid","data":{"is_correct":false,"result":["correct","absent","absent","absent","absent"]}}"#,
        )
        .unwrap();

        assert_eq!(
            verdict,
            GuessResult::Valid(ValidGuess {
                is_correct: false,
                result: vec![
                    LetterFeedback::Correct,
                    LetterFeedback::Absent,
                    LetterFeedback::Absent,
                    LetterFeedback::Absent,
                    LetterFeedback::Absent,
                ],
            })
        );
    }

    #[test]
    fn invalid_verdict_unit_reason_parses() {
        let verdict: GuessResult =
            serde_json::from_str(r#"{"type":"invalid","data":"not_enough_letters"}"#).unwrap();
        assert_eq!(verdict, GuessResult::Invalid(InvalidGuess::NotEnoughLetters));

        let verdict: GuessResult =
            serde_json::from_str(r#"{"type":"invalid","data":"not_in_corpus"}"#).unwrap();
        assert_eq!(verdict, GuessResult::Invalid(InvalidGuess::NotInCorpus));
    }

    #[test]
    fn invalid_verdict_internal_error_parses() {
        let verdict: GuessResult = serde_json::from_str(
            r#"{"type":"invalid","data":{"internal_error":"Unable to fetch gene symbol"}}"#,
        )
        .unwrap();
        assert_eq!(
            verdict,
            GuessResult::Invalid(InvalidGuess::InternalError(
                "Unable to fetch gene symbol".to_string()
            ))
        );
    }

    #[test]
    fn unknown_reason_fails_to_parse() {
        // Surfaced as OracleError::Malformed by the transport layer; the
        // session records nothing for it.
        let result: Result<GuessResult, _> =
            serde_json::from_str(r#"{"type":"invalid","data":"word_of_the_day_off"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn letter_feedback_maps_onto_letter_states() {
        assert_eq!(LetterState::from(LetterFeedback::Correct), LetterState::Correct);
        assert_eq!(LetterState::from(LetterFeedback::Present), LetterState::Present);
        assert_eq!(LetterState::from(LetterFeedback::Absent), LetterState::Absent);
    }

    #[test]
    fn raw_puzzle_converts() {
        let raw = RawPuzzle {
            outer_letters: vec!["A".into(), "B".into(), "R".into()],
            center_letter: "C".into(),
        };
        let puzzle = SpellingPuzzle::try_from(raw).unwrap();

        assert_eq!(puzzle.center_letter(), 'C');
        assert_eq!(puzzle.outer_letters(), &['A', 'B', 'R']);
        assert!(puzzle.contains('C'));
        assert!(puzzle.contains('A'));
        assert!(!puzzle.contains('Z'));
    }

    #[test]
    fn empty_center_letter_is_rejected() {
        // The backend answers an empty grid when generation failed
        let raw = RawPuzzle {
            outer_letters: Vec::new(),
            center_letter: String::new(),
        };
        assert!(SpellingPuzzle::try_from(raw).is_err());
    }

    #[test]
    fn spelling_params_defaults() {
        let params = SpellingParams::for_seed(42);
        assert_eq!(params.seed, 42);
        assert_eq!(params.min_length, 4);
        assert_eq!(params.min_symbols, 10);
        assert_eq!(params.num_letters, 7);
    }
}
