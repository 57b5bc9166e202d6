//! Keyboard letter states
//!
//! Tracks the best feedback each letter has received during one level
//! attempt. States only ever move up `Absent < Present < Correct`.

use super::{Feedback, Score};
use rustc_hash::FxHashMap;

/// Best feedback seen per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStates {
    states: FxHashMap<char, Feedback>,
}

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `feedback` for `letter` unless it already has an equal or
    /// better state
    ///
    /// Returns `true` if the stored state changed.
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::{Feedback, KeyStates};
    ///
    /// let mut keys = KeyStates::new();
    /// keys.set('a', Feedback::Present);
    /// keys.set('a', Feedback::Absent);
    /// assert_eq!(keys.get('A'), Some(Feedback::Present));
    /// ```
    pub fn set(&mut self, letter: char, feedback: Feedback) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.states.get(&letter) {
            Some(&current) if current >= feedback => false,
            _ => {
                self.states.insert(letter, feedback);
                true
            }
        }
    }

    /// State for `letter`, `None` if it has not been guessed yet
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        self.states.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Apply every letter of a scored guess
    pub fn apply(&mut self, guess: &str, score: &Score) {
        for (letter, &feedback) in guess.chars().zip(score.as_slice()) {
            self.set(letter, feedback);
        }
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
