//! Spelling Gene guess builder
//!
//! The simpler sibling state machine: build a symbol from the puzzle's
//! letters, ask the oracle whether it counts, and grow the score. There is
//! no terminal state; found symbols and score only ever grow.

use crate::oracle::{OracleError, SpellingOracle, SpellingParams, SpellingPuzzle};
use std::collections::BTreeSet;
use tracing::warn;

/// One Spelling Gene session against an oracle
pub struct SpellingSession<O> {
    oracle: O,
    params: SpellingParams,
    puzzle: SpellingPuzzle,
    input: Vec<char>,
    found: BTreeSet<String>,
    score: usize,
    message: Option<String>,
    loading: bool,
}

impl<O: SpellingOracle> SpellingSession<O> {
    /// Start a session, fetching the letter grid from the oracle
    ///
    /// # Errors
    /// Returns an error if the puzzle cannot be fetched or generated.
    pub fn new(oracle: O, params: SpellingParams) -> Result<Self, OracleError> {
        let puzzle = oracle.fetch_puzzle(&params)?;

        Ok(Self {
            oracle,
            params,
            puzzle,
            input: Vec::new(),
            found: BTreeSet::new(),
            score: 0,
            message: None,
            loading: false,
        })
    }

    #[inline]
    #[must_use]
    pub const fn params(&self) -> &SpellingParams {
        &self.params
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &SpellingPuzzle {
        &self.puzzle
    }

    /// Partial input as a string
    #[must_use]
    pub fn typed(&self) -> String {
        self.input.iter().collect()
    }

    /// Symbols found so far, in sorted order
    #[inline]
    #[must_use]
    pub const fn found(&self) -> &BTreeSet<String> {
        &self.found
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Append a letter to the guess under construction
    ///
    /// Accepted set: `A`-`Z` (lower case normalized) and hyphen, filtered
    /// against the puzzle's actual letters. Ignored while a check is in
    /// flight.
    pub fn append_letter(&mut self, c: char) {
        if self.loading {
            return;
        }

        let Some(c) = normalize_letter(c) else {
            return;
        };

        if !self.puzzle.contains(c) {
            return;
        }

        self.input.push(c);
    }

    /// Delete the last letter; clears any displayed message
    pub fn delete_letter(&mut self) {
        if self.loading {
            return;
        }

        self.message = None;
        self.input.pop();
    }

    /// Discard the whole guess under construction
    pub fn clear_input(&mut self) {
        if self.loading {
            return;
        }

        self.message = None;
        self.input.clear();
    }

    /// Submit the guess under construction
    ///
    /// Too-short guesses and symbols already found never reach the oracle:
    /// the input clears and nothing else changes. An accepted symbol joins
    /// the found set and scores its character count. A rejected symbol
    /// clears the input; a transport failure keeps it so resubmission is
    /// one keypress away.
    pub fn submit(&mut self) {
        if self.loading {
            return;
        }

        let guess = self.typed();

        if guess.chars().count() < self.params.min_length {
            self.input.clear();
            self.message = Some(format!(
                "Symbols need at least {} letters",
                self.params.min_length
            ));
            return;
        }

        if self.found.contains(&guess) {
            self.input.clear();
            self.message = Some(format!("Already found {guess}"));
            return;
        }

        self.loading = true;
        let verdict = self.oracle.check_symbol(&self.params, &guess);
        self.loading = false;

        match verdict {
            Ok(true) => {
                let gained = guess.chars().count();
                self.score += gained;
                self.message = Some(format!("{guess} +{gained}"));
                self.found.insert(guess);
                self.input.clear();
            }
            Ok(false) => {
                self.message = Some(format!("{guess} is not a known symbol"));
                self.input.clear();
            }
            Err(err) => {
                warn!(seed = self.params.seed, "symbol check failed: {err}");
                self.message = Some(format!("Couldn't reach the oracle: {err}"));
            }
        }
    }
}

fn normalize_letter(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c.to_ascii_uppercase()),
        'A'..='Z' | '-' => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ScriptedOracle;

    fn session() -> SpellingSession<ScriptedOracle> {
        // Outer letters B R C A, center K
        let oracle = ScriptedOracle::new()
            .with_puzzle(SpellingPuzzle::new(vec!['B', 'R', 'C', 'A'], 'K'));
        SpellingSession::new(oracle, SpellingParams::for_seed(20_277)).unwrap()
    }

    fn type_word(session: &mut SpellingSession<ScriptedOracle>, word: &str) {
        for c in word.chars() {
            session.append_letter(c);
        }
    }

    #[test]
    fn starts_empty() {
        let session = session();
        assert_eq!(session.score(), 0);
        assert!(session.found().is_empty());
        assert_eq!(session.typed(), "");
        assert!(session.message().is_none());
    }

    #[test]
    fn construction_fails_without_puzzle() {
        let result = SpellingSession::new(ScriptedOracle::new(), SpellingParams::for_seed(1));
        assert!(matches!(result, Err(OracleError::Unavailable { .. })));
    }

    #[test]
    fn letters_outside_the_puzzle_are_ignored() {
        let mut session = session();
        type_word(&mut session, "bZrQk-");
        // Z and Q are not in the grid; hyphen is not in this grid either
        assert_eq!(session.typed(), "BRK");
    }

    #[test]
    fn short_guess_never_reaches_the_oracle() {
        let mut session = session();
        type_word(&mut session, "AB");

        session.submit();

        assert_eq!(session.typed(), "");
        assert_eq!(session.score(), 0);
        assert!(session.found().is_empty());
        assert_eq!(session.oracle.check_calls(), 0);
        assert_eq!(session.message(), Some("Symbols need at least 4 letters"));
    }

    #[test]
    fn accepted_symbol_scores_its_length() {
        let mut session = session();
        type_word(&mut session, "BRCA");

        session.oracle.push_check(true);
        session.submit();

        assert_eq!(session.score(), 4);
        assert!(session.found().contains("BRCA"));
        assert_eq!(session.typed(), "");
        assert_eq!(session.message(), Some("BRCA +4"));
    }

    #[test]
    fn duplicate_symbol_is_a_precheck_no_op() {
        let mut session = session();
        type_word(&mut session, "BRCA");
        session.oracle.push_check(true);
        session.submit();

        // Even though the oracle would say yes again, it is never asked
        type_word(&mut session, "BRCA");
        session.oracle.push_check(true);
        session.submit();

        assert_eq!(session.score(), 4);
        assert_eq!(session.found().len(), 1);
        assert_eq!(session.oracle.check_calls(), 1);
        assert_eq!(session.message(), Some("Already found BRCA"));
        assert_eq!(session.typed(), "");
    }

    #[test]
    fn rejected_symbol_clears_input_with_message() {
        let mut session = session();
        type_word(&mut session, "CRAB");

        session.oracle.push_check(false);
        session.submit();

        assert_eq!(session.score(), 0);
        assert!(session.found().is_empty());
        assert_eq!(session.typed(), "");
        assert_eq!(session.message(), Some("CRAB is not a known symbol"));
    }

    #[test]
    fn transport_failure_preserves_input() {
        let mut session = session();
        type_word(&mut session, "BRCA");

        session
            .oracle
            .push_check_failure(OracleError::Malformed("timeout".to_string()));
        session.submit();

        assert_eq!(session.score(), 0);
        assert!(session.found().is_empty());
        assert_eq!(session.typed(), "BRCA");
        assert!(session.message().unwrap().starts_with("Couldn't reach the oracle"));
        assert!(!session.is_loading());
    }

    #[test]
    fn score_and_found_grow_monotonically() {
        let mut session = session();

        for (word, accepted) in [("BRCA", true), ("KARB", false), ("RACK", true)] {
            type_word(&mut session, word);
            session.oracle.push_check(accepted);
            session.submit();
        }

        assert_eq!(session.score(), 8);
        assert_eq!(session.found().len(), 2);
        // BTreeSet iteration is sorted
        let found: Vec<&String> = session.found().iter().collect();
        assert_eq!(found, ["BRCA", "RACK"]);
    }

    #[test]
    fn delete_clears_message_and_pops() {
        let mut session = session();
        type_word(&mut session, "AB");
        session.submit(); // too short, sets message

        session.delete_letter();
        assert!(session.message().is_none());
        assert_eq!(session.typed(), "");
    }
}
