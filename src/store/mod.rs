//! Persistence collaborator
//!
//! The session talks to storage only through [`Store`]. Two implementations
//! ship with the crate: [`MemoryStore`] for tests and one-off games, and
//! [`JsonFileStore`], a JSON document on disk.
//!
//! Progress is kept canonically as the set of completed level ids per player.
//! Older records stored a bare "highest unlocked index" integer; those are
//! converted once by [`Store::migrate_legacy_progress`].

mod data;
mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::levels::{Level, LevelCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Completed levels for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub completed: BTreeSet<String>,
}

impl Progress {
    #[must_use]
    pub fn is_completed(&self, level_id: &str) -> bool {
        self.completed.contains(level_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Index of the first level in `levels` that is not completed
    ///
    /// Equals `levels.len()` when everything is done.
    #[must_use]
    pub fn first_open(&self, levels: &[Level]) -> usize {
        levels
            .iter()
            .position(|l| !self.is_completed(&l.id))
            .unwrap_or(levels.len())
    }
}

/// Storage interface used by the game
///
/// Writes are best-effort: implementations log failures instead of
/// returning them, so a broken disk never interrupts play.
pub trait Store {
    /// Progress for `player`; unknown or unreadable records are empty
    fn load_progress(&self, player: &str) -> Progress;

    /// Record `level_id` as completed for `player`
    ///
    /// Progress never regresses: this only ever adds ids.
    fn save_progress(&mut self, player: &str, level_id: &str);

    /// Guesses previously submitted for `level_id`, oldest first
    fn load_guesses(&self, level_id: &str) -> Vec<String>;

    /// Append a submitted guess to the history for `level_id`
    fn save_guess(&mut self, level_id: &str, guess: &str);

    /// Erase the guess history for `level_id`
    fn clear_guesses(&mut self, level_id: &str);

    /// Stored word for a shared custom game id
    fn load_custom_word(&self, game_id: &str) -> Option<String>;

    fn save_custom_word(&mut self, game_id: &str, word: &str);

    /// Convert legacy integer progress records into completed-id sets
    ///
    /// Returns the number of players migrated.
    fn migrate_legacy_progress(&mut self, catalog: &LevelCatalog) -> usize;
}
