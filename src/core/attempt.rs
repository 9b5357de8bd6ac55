//! A single evaluated guess row
//!
//! An `Attempt` is produced atomically from one oracle verdict and is
//! immutable afterwards: the board history is a list of these.

use super::{LetterResult, LetterState};
use std::fmt;

/// An evaluated guess: one `LetterResult` per character, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    letters: Vec<LetterResult>,
}

/// Error pairing a guess with the oracle's per-letter states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMismatch {
    pub characters: usize,
    pub states: usize,
}

impl fmt::Display for FeedbackMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oracle returned {} letter states for a {}-character guess",
            self.states, self.characters
        )
    }
}

impl std::error::Error for FeedbackMismatch {}

impl Attempt {
    /// Pair the guessed characters with the oracle's states, position by position
    ///
    /// # Errors
    /// Returns `FeedbackMismatch` if the oracle returned a different number
    /// of states than the guess has characters. The caller treats that as a
    /// malformed response and records nothing.
    pub fn from_feedback(
        characters: &[char],
        states: &[LetterState],
    ) -> Result<Self, FeedbackMismatch> {
        if characters.len() != states.len() {
            return Err(FeedbackMismatch {
                characters: characters.len(),
                states: states.len(),
            });
        }

        let letters = characters
            .iter()
            .zip(states)
            .map(|(&character, &state)| LetterResult::new(character, state))
            .collect();

        Ok(Self { letters })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The guessed word as a string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.state == LetterState::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_characters_with_states() {
        let attempt = Attempt::from_feedback(
            &['T', 'P', '5', '3'],
            &[
                LetterState::Correct,
                LetterState::Absent,
                LetterState::Present,
                LetterState::Absent,
            ],
        )
        .unwrap();

        assert_eq!(attempt.len(), 4);
        assert_eq!(attempt.word(), "TP53");
        assert_eq!(attempt.letters()[0].character, 'T');
        assert_eq!(attempt.letters()[0].state, LetterState::Correct);
        assert_eq!(attempt.letters()[2].state, LetterState::Present);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Attempt::from_feedback(&['A', 'B'], &[LetterState::Correct]).unwrap_err();
        assert_eq!(
            err,
            FeedbackMismatch {
                characters: 2,
                states: 1
            }
        );
    }

    #[test]
    fn all_correct_detection() {
        let won = Attempt::from_feedback(
            &['B', 'R', 'C', 'A'],
            &[LetterState::Correct; 4],
        )
        .unwrap();
        assert!(won.is_all_correct());

        let close = Attempt::from_feedback(
            &['B', 'R', 'C', 'A'],
            &[
                LetterState::Correct,
                LetterState::Correct,
                LetterState::Correct,
                LetterState::Present,
            ],
        )
        .unwrap();
        assert!(!close.is_all_correct());
    }

    #[test]
    fn empty_attempt_is_trivially_all_correct() {
        // Degenerate case: zero-length guesses never reach here in practice,
        // the oracle rejects them first.
        let attempt = Attempt::from_feedback(&[], &[]).unwrap();
        assert!(attempt.is_empty());
        assert!(attempt.is_all_correct());
    }
}
