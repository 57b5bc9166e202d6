//! Command implementations

pub mod custom;
pub mod progress;
pub mod score;
pub mod simple;

pub use custom::{CreatedGame, create_game, open_game};
pub use progress::collect_progress;
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
