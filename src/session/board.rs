//! Guess rows
//!
//! A row has one cell per letter slot of the target layout. Space slots have
//! no cell; the session cursor walks over them.

use crate::core::Score;

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    cells: Vec<Option<char>>,
    score: Option<Score>,
}

impl GuessRow {
    #[must_use]
    pub fn new(letter_count: usize) -> Self {
        Self {
            cells: vec![None; letter_count],
            score: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Feedback once the row has been submitted
    #[inline]
    #[must_use]
    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// The typed letters in order, `None` until every cell is filled
    #[must_use]
    pub fn guess(&self) -> Option<String> {
        self.cells.iter().copied().collect()
    }

    pub(crate) fn set(&mut self, index: usize, letter: Option<char>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = letter;
        }
    }

    pub(crate) fn fill(&mut self, guess: &str) {
        for (cell, letter) in self.cells.iter_mut().zip(guess.chars()) {
            *cell = Some(letter);
        }
    }

    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = Some(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_completion() {
        let mut row = GuessRow::new(3);
        assert!(row.is_empty());
        assert_eq!(row.guess(), None);

        row.set(0, Some('C'));
        row.set(1, Some('A'));
        assert_eq!(row.filled(), 2);
        assert!(!row.is_complete());

        row.set(2, Some('T'));
        assert!(row.is_complete());
        assert_eq!(row.guess().as_deref(), Some("CAT"));
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut row = GuessRow::new(2);
        row.set(5, Some('X'));
        assert!(row.is_empty());
    }

    #[test]
    fn fill_writes_all_cells() {
        let mut row = GuessRow::new(5);
        row.fill("CRANE");
        assert_eq!(row.guess().as_deref(), Some("CRANE"));
        assert!(row.score().is_none());
    }
}
