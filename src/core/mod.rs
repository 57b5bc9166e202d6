//! Core domain types for the guessing game
//!
//! Pure types with no I/O: target layouts, guess scoring, and keyboard
//! letter states.

mod feedback;
mod keyboard;
mod layout;

pub use feedback::{Feedback, Score};
pub use keyboard::KeyStates;
pub use layout::{LayoutError, Slot, TargetLayout};

/// Rows available for guessing in every level
pub const MAX_GUESSES: usize = 6;
