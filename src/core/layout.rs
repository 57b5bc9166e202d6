//! Target phrase layout
//!
//! A target phrase is laid out as a row of slots. Letter slots hold one
//! expected character; space slots separate the words of a multi-word target
//! and are never typed into or scored.

use std::fmt;
use thiserror::Error;

/// One position in a target layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Letter(char),
    Space,
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn is_space(self) -> bool {
        matches!(self, Self::Space)
    }
}

/// Error type for phrases that cannot be used as targets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("target phrase is empty")]
    Empty,
    #[error("target phrase may only contain ASCII letters and spaces, found {0:?}")]
    InvalidCharacter(char),
}

/// Slot layout derived from a target phrase
///
/// Invariant: the number of letter slots equals the length of the phrase with
/// spaces removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    phrase: String,
    letters: String,
    slots: Vec<Slot>,
    segments: Vec<String>,
    // letter index for each slot, None for spaces
    letter_index: Vec<Option<usize>>,
}

impl TargetLayout {
    /// Parse a target phrase
    ///
    /// The phrase is uppercased, trimmed, and runs of whitespace collapse to a
    /// single space slot.
    ///
    /// # Errors
    /// Returns `LayoutError` if the phrase has no letters or contains anything
    /// other than ASCII letters and whitespace.
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::core::TargetLayout;
    ///
    /// let layout = TargetLayout::parse("gavin and  stacey").unwrap();
    /// assert_eq!(layout.phrase(), "GAVIN AND STACEY");
    /// assert_eq!(layout.letters(), "GAVINANDSTACEY");
    /// assert_eq!(layout.slots().len(), 16);
    /// ```
    pub fn parse(phrase: &str) -> Result<Self, LayoutError> {
        if let Some(bad) = phrase
            .chars()
            .find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
        {
            return Err(LayoutError::InvalidCharacter(bad));
        }

        let segments: Vec<String> = phrase
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect();
        if segments.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut slots = Vec::new();
        let mut letter_index = Vec::new();
        let mut letters = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                slots.push(Slot::Space);
                letter_index.push(None);
            }
            for ch in segment.chars() {
                letter_index.push(Some(letters.len()));
                slots.push(Slot::Letter(ch));
                letters.push(ch);
            }
        }

        Ok(Self {
            phrase: segments.join(" "),
            letters,
            slots,
            segments,
            letter_index,
        })
    }

    /// The normalised phrase, words separated by single spaces
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The phrase with spaces removed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Individual words of the phrase
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of letter slots
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_multi_word(&self) -> bool {
        self.segments.len() > 1
    }

    /// Index into the letter cells for a slot, `None` for space slots
    /// and out-of-range positions
    #[inline]
    #[must_use]
    pub fn letter_index(&self, slot: usize) -> Option<usize> {
        self.letter_index.get(slot).copied().flatten()
    }

    /// True if `slot` is a space slot
    #[inline]
    #[must_use]
    pub fn is_space(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(|s| s.is_space())
    }

    /// Split a flat guess into the word lengths of this layout
    ///
    /// Returns `None` when the guess length differs from the letter count.
    #[must_use]
    pub fn split_guess<'g>(&self, guess: &'g str) -> Option<Vec<&'g str>> {
        if guess.len() != self.letter_count() || !guess.is_ascii() {
            return None;
        }

        let mut pieces = Vec::with_capacity(self.segments.len());
        let mut rest = guess;
        for segment in &self.segments {
            let (head, tail) = rest.split_at(segment.len());
            pieces.push(head);
            rest = tail;
        }
        Some(pieces)
    }
}

impl fmt::Display for TargetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_layout() {
        let layout = TargetLayout::parse("crane").unwrap();
        assert_eq!(layout.phrase(), "CRANE");
        assert_eq!(layout.letter_count(), 5);
        assert!(!layout.is_multi_word());
        assert!(layout.slots().iter().all(|s| !s.is_space()));
    }

    #[test]
    fn multi_word_layout_slots() {
        let layout = TargetLayout::parse("GAVIN AND STACEY").unwrap();
        assert_eq!(layout.segments(), &["GAVIN", "AND", "STACEY"]);
        assert_eq!(layout.letter_count(), 14);
        assert_eq!(layout.slots().len(), 16);
        assert!(layout.is_space(5));
        assert!(layout.is_space(9));
        assert_eq!(layout.letter_index(5), None);
        assert_eq!(layout.letter_index(6), Some(5));
        assert_eq!(layout.letter_index(15), Some(13));
        assert_eq!(layout.letter_index(16), None);
    }

    #[test]
    fn letter_slots_match_stripped_length() {
        for phrase in ["A", "HELLO WORLD", "  spaced   out  ", "ONE TWO THREE FOUR"] {
            let layout = TargetLayout::parse(phrase).unwrap();
            let letter_slots = layout.slots().iter().filter(|s| !s.is_space()).count();
            let stripped = phrase.chars().filter(|c| !c.is_whitespace()).count();
            assert_eq!(letter_slots, stripped, "{phrase}");
        }
    }

    #[test]
    fn whitespace_is_normalised() {
        let layout = TargetLayout::parse("  spaced   out  ").unwrap();
        assert_eq!(layout.phrase(), "SPACED OUT");
        assert_eq!(layout.slots().first(), Some(&Slot::Letter('S')));
        assert_eq!(layout.slots().last(), Some(&Slot::Letter('T')));
    }

    #[test]
    fn invalid_phrases() {
        assert_eq!(TargetLayout::parse(""), Err(LayoutError::Empty));
        assert_eq!(TargetLayout::parse("   "), Err(LayoutError::Empty));
        assert_eq!(
            TargetLayout::parse("cran3"),
            Err(LayoutError::InvalidCharacter('3'))
        );
        assert!(TargetLayout::parse("café").is_err());
    }

    #[test]
    fn split_guess_by_segments() {
        let layout = TargetLayout::parse("GAVIN AND STACEY").unwrap();
        assert_eq!(
            layout.split_guess("GAVINANDSTACEY"),
            Some(vec!["GAVIN", "AND", "STACEY"])
        );
        assert_eq!(layout.split_guess("GAVIN"), None);
    }
}
