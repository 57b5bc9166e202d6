//! Score a single guess against a target phrase

use crate::{Error, Result};
use crate::core::{Score, TargetLayout};

/// A scored guess, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub layout: TargetLayout,
    pub score: Score,
}

/// Score `guess` against `target`
///
/// Spaces in the guess are ignored; the target's own spaces decide where
/// words split.
///
/// # Errors
///
/// Returns an error if the target is not a valid phrase, or the guess is not
/// alphabetic with the same number of letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult> {
    let layout = TargetLayout::parse(target)?;
    let guess: String = guess
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    // Same validation as a target, then the letter counts must agree
    let parsed = TargetLayout::parse(&guess)?;
    if parsed.letter_count() != layout.letter_count() {
        return Err(Error::LengthMismatch {
            expected: layout.letter_count(),
            actual: parsed.letter_count(),
        });
    }

    let score = Score::for_layout(&guess, &layout);
    Ok(ScoreResult {
        guess,
        layout,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    #[test]
    fn scores_single_word() {
        let result = score_guess("trace", "crane").unwrap();
        assert_eq!(result.guess, "TRACE");
        assert_eq!(result.score.count(Feedback::Correct), 3);
        assert_eq!(result.score.count(Feedback::Present), 1);
    }

    #[test]
    fn guess_spaces_are_optional() {
        let a = score_guess("lemon tart", "LEMON TART").unwrap();
        let b = score_guess("lemontart", "LEMON TART").unwrap();
        assert_eq!(a.score, b.score);
        assert!(a.score.is_perfect());
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            score_guess("cranes", "crane"),
            Err(Error::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(score_guess("cr4ne", "crane"), Err(Error::Layout(_))));
        assert!(matches!(score_guess("crane", ""), Err(Error::Layout(_))));
    }
}
