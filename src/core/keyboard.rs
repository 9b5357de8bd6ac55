//! On-screen keyboard highlight map
//!
//! Tracks, per character, the best feedback state ever observed across all
//! attempts of a session. Invariant: a key only moves forward along
//! `Absent → Present → Correct`, never backward, regardless of the order
//! attempts are submitted in.

use super::{Attempt, LetterState};
use rustc_hash::FxHashMap;

/// Character → best observed `LetterState`
#[derive(Debug, Clone, Default)]
pub struct KeyboardFeedback {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated attempt into the map
    pub fn observe(&mut self, attempt: &Attempt) {
        for letter in attempt.letters() {
            self.observe_letter(letter.character, letter.state);
        }
    }

    fn observe_letter(&mut self, character: char, state: LetterState) {
        // Empty carries no information about a key
        if state == LetterState::Empty {
            return;
        }

        let entry = self.states.entry(character).or_insert(state);
        if state.upgrades(*entry) {
            *entry = state;
        }
    }

    /// Best state observed for a character, if any
    #[must_use]
    pub fn state_of(&self, character: char) -> Option<LetterState> {
        self.states.get(&character).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget everything (session reset)
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(pairs: &[(char, LetterState)]) -> Attempt {
        let characters: Vec<char> = pairs.iter().map(|(c, _)| *c).collect();
        let states: Vec<LetterState> = pairs.iter().map(|(_, s)| *s).collect();
        Attempt::from_feedback(&characters, &states).unwrap()
    }

    #[test]
    fn records_first_observation() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[
            ('T', LetterState::Correct),
            ('P', LetterState::Absent),
        ]));

        assert_eq!(keyboard.state_of('T'), Some(LetterState::Correct));
        assert_eq!(keyboard.state_of('P'), Some(LetterState::Absent));
        assert_eq!(keyboard.state_of('X'), None);
    }

    #[test]
    fn upgrades_absent_to_present_to_correct() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[('A', LetterState::Absent)]));
        keyboard.observe(&attempt(&[('A', LetterState::Present)]));
        assert_eq!(keyboard.state_of('A'), Some(LetterState::Present));

        keyboard.observe(&attempt(&[('A', LetterState::Correct)]));
        assert_eq!(keyboard.state_of('A'), Some(LetterState::Correct));
    }

    #[test]
    fn never_downgrades() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[('G', LetterState::Correct)]));

        keyboard.observe(&attempt(&[('G', LetterState::Present)]));
        assert_eq!(keyboard.state_of('G'), Some(LetterState::Correct));

        keyboard.observe(&attempt(&[('G', LetterState::Absent)]));
        assert_eq!(keyboard.state_of('G'), Some(LetterState::Correct));
    }

    #[test]
    fn present_survives_later_absent() {
        // A duplicated letter can score Present in one attempt and Absent in
        // a later one; the keyboard keeps the stronger signal.
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[('E', LetterState::Present)]));
        keyboard.observe(&attempt(&[('E', LetterState::Absent)]));
        assert_eq!(keyboard.state_of('E'), Some(LetterState::Present));
    }

    #[test]
    fn duplicate_letter_within_one_attempt_keeps_best() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[
            ('E', LetterState::Absent),
            ('E', LetterState::Correct),
        ]));
        assert_eq!(keyboard.state_of('E'), Some(LetterState::Correct));
    }

    #[test]
    fn empty_observations_are_ignored() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[('Q', LetterState::Empty)]));
        assert_eq!(keyboard.state_of('Q'), None);
        assert!(keyboard.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut keyboard = KeyboardFeedback::new();
        keyboard.observe(&attempt(&[('T', LetterState::Correct)]));
        assert!(!keyboard.is_empty());

        keyboard.clear();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.state_of('T'), None);
    }
}
