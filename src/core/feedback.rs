//! Per-letter feedback and guess scoring
//!
//! A score holds one [`Feedback`] per letter slot of the target:
//! - Absent: letter not in the target segment
//! - Present: letter in the target segment, wrong position
//! - Correct: letter in the correct position
//!
//! Multi-word targets are scored one segment at a time, so a letter can only
//! earn credit from the word it was typed into.

use super::TargetLayout;
use std::fmt;

/// Feedback for a single letter
///
/// Variants are declared in precedence order, so `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Precedence used when upgrading keyboard states (1-3)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Square emoji for sharing and plain-text output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback for a whole guess, one entry per letter slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Feedback>);

impl Score {
    /// Score `guess` against a single-word `target`
    ///
    /// Both operands are compared case-insensitively. They must have the same
    /// length; callers validate this before scoring.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both positions
    /// 2. Second pass: for each unconsumed guess letter, consume the first
    ///    unconsumed matching target letter and mark it present
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::{Feedback, Score};
    ///
    /// let score = Score::calculate("trace", "crane");
    /// assert_eq!(
    ///     score.as_slice(),
    ///     &[
    ///         Feedback::Absent,
    ///         Feedback::Correct,
    ///         Feedback::Correct,
    ///         Feedback::Present,
    ///         Feedback::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Self {
        let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
        let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();
        Self(score_segment(&guess, &target))
    }

    /// Score a flat (space-stripped) guess against a possibly multi-word target
    ///
    /// The guess is cut into pieces matching the lengths of the target's
    /// segments and each piece is scored on its own.
    #[must_use]
    pub fn for_layout(guess: &str, layout: &TargetLayout) -> Self {
        let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
        debug_assert_eq!(
            guess.len(),
            layout.letter_count(),
            "guess length must match the target's letter count"
        );

        let mut result = Vec::with_capacity(layout.letter_count());
        let mut offset = 0;
        for segment in layout.segments() {
            let target: Vec<char> = segment.chars().collect();
            let end = (offset + target.len()).min(guess.len());
            let piece = guess.get(offset..end).unwrap_or_default();
            result.extend(score_segment(piece, &target));
            offset += target.len();
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == feedback).count()
    }

    /// Render as a string of colored squares, e.g. "⬜🟩🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

/// Two-pass scoring of one segment
///
/// The result always has one entry per target position; guess positions
/// beyond the target are ignored and missing ones stay absent.
fn score_segment(guess: &[char], target: &[char]) -> Vec<Feedback> {
    debug_assert_eq!(guess.len(), target.len(), "segment lengths must match");

    let mut result = vec![Feedback::Absent; target.len()];
    let mut guess_left: Vec<Option<char>> = guess.iter().copied().map(Some).collect();
    let mut target_left: Vec<Option<char>> = target.iter().copied().map(Some).collect();

    // First pass: exact matches
    for (i, slot) in result.iter_mut().enumerate() {
        if guess_left.get(i).copied().flatten() == Some(target[i]) {
            *slot = Feedback::Correct;
            guess_left[i] = None;
            target_left[i] = None;
        }
    }

    // Second pass: displaced matches, each target letter used at most once
    for (i, slot) in result.iter_mut().enumerate() {
        let Some(letter) = guess_left.get(i).copied().flatten() else {
            continue;
        };
        if let Some(found) = target_left.iter_mut().find(|t| **t == Some(letter)) {
            *slot = Feedback::Present;
            *found = None;
        }
    }

    result
}
