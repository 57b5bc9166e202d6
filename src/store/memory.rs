//! Ephemeral store kept only in memory

use super::data::StoreData;
use super::{Progress, Store};
use crate::levels::LevelCatalog;

/// Store that forgets everything when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a JSON document in the on-disk format
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        Self {
            data: StoreData::from_json(text),
        }
    }
}

impl Store for MemoryStore {
    fn load_progress(&self, player: &str) -> Progress {
        self.data.load_progress(player)
    }

    fn save_progress(&mut self, player: &str, level_id: &str) {
        self.data.save_progress(player, level_id);
    }

    fn load_guesses(&self, level_id: &str) -> Vec<String> {
        self.data.load_guesses(level_id)
    }

    fn save_guess(&mut self, level_id: &str, guess: &str) {
        self.data.save_guess(level_id, guess);
    }

    fn clear_guesses(&mut self, level_id: &str) {
        self.data.clear_guesses(level_id);
    }

    fn load_custom_word(&self, game_id: &str) -> Option<String> {
        self.data.load_custom_word(game_id)
    }

    fn save_custom_word(&mut self, game_id: &str, word: &str) {
        self.data.save_custom_word(game_id, word);
    }

    fn migrate_legacy_progress(&mut self, catalog: &LevelCatalog) -> usize {
        self.data.migrate_legacy_progress(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::builtin_catalog;

    #[test]
    fn store_trait_round_trip() {
        let mut store = MemoryStore::new();
        store.save_progress("Mia", "mia-01");
        store.save_guess("mia-02", "CRANE");
        store.save_custom_word("AB12CD", "lemon");

        assert!(store.load_progress("Mia").is_completed("mia-01"));
        assert_eq!(store.load_guesses("mia-02"), ["CRANE"]);
        assert_eq!(store.load_custom_word("AB12CD").as_deref(), Some("LEMON"));

        store.clear_guesses("mia-02");
        assert!(store.load_guesses("mia-02").is_empty());
    }

    #[test]
    fn from_json_then_migrate() {
        let mut store = MemoryStore::from_json(r#"{"progress": {"Hannah": 1}}"#);
        assert_eq!(store.migrate_legacy_progress(&builtin_catalog()), 1);
        assert!(store.load_progress("Hannah").is_completed("hannah-01"));
    }
}
