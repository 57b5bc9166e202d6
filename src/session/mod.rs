//! Playing a level
//!
//! - [`board`]: one row of guess cells
//! - [`state`]: the per-level state machine
//! - [`oracle`]: word validity checks
//! - [`game`]: the controller tying state to catalog, store and oracle

pub mod board;
pub mod game;
pub mod oracle;
pub mod state;

use std::time::Duration;

pub use board::GuessRow;
pub use game::{Game, LevelStatus, Reveal, Submission};
pub use oracle::{AcceptAll, Dictionary, OracleType, WordOracle};
pub use state::{Controls, Message, MessageStyle, Outcome, Phase, RESTARTS_BEFORE_SKIP, Session};

/// Reveal animation timing
///
/// Tiles flip one after another, so input stays locked for one step per
/// letter plus a short settle delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub per_letter: Duration,
    pub settle: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            per_letter: Duration::from_millis(300),
            settle: Duration::from_millis(50),
        }
    }
}

impl RevealTiming {
    /// No animation at all (line mode and tests)
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            per_letter: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }

    /// Total lock for a row of `letters` letters
    #[must_use]
    pub fn lock_for(&self, letters: usize) -> Duration {
        self.per_letter * u32::try_from(letters).unwrap_or(u32::MAX) + self.settle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_scales_with_letters() {
        let timing = RevealTiming::default();
        assert_eq!(timing.lock_for(5), Duration::from_millis(1550));
        assert_eq!(timing.lock_for(14), Duration::from_millis(4250));
        assert_eq!(RevealTiming::instant().lock_for(5), Duration::ZERO);
    }
}
