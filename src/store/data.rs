//! In-memory document shared by the store implementations

use super::Progress;
use crate::levels::LevelCatalog;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// One player's progress as found in storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(super) enum StoredProgress {
    Completed(Progress),
    /// Highest unlocked level index
    Legacy(u64),
    /// Kept verbatim so a bad record is never silently overwritten
    Corrupt(Value),
}

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct StoreData {
    #[serde(default)]
    pub progress: BTreeMap<String, StoredProgress>,
    #[serde(default)]
    pub guesses: BTreeMap<String, Vec<String>>,
    #[serde(default, rename = "customGames")]
    pub custom_games: BTreeMap<String, String>,
}

impl StoreData {
    /// Decode a stored document, falling back to empty sections
    ///
    /// Each section is decoded on its own so a corrupt guess history does
    /// not also wipe progress.
    pub fn from_json(text: &str) -> Self {
        let root = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!("store document is not an object, starting empty");
                return Self::default();
            }
            Err(e) => {
                warn!(error = %e, "store document is not valid JSON, starting empty");
                return Self::default();
            }
        };

        Self {
            progress: section(&root, "progress"),
            guesses: section(&root, "guesses"),
            custom_games: section(&root, "customGames"),
        }
    }

    pub fn load_progress(&self, player: &str) -> Progress {
        match self.progress.get(player) {
            Some(StoredProgress::Completed(progress)) => progress.clone(),
            Some(StoredProgress::Legacy(index)) => {
                warn!(player, index, "legacy progress record was not migrated");
                Progress::default()
            }
            Some(StoredProgress::Corrupt(value)) => {
                warn!(player, %value, "ignoring unreadable progress record");
                Progress::default()
            }
            None => Progress::default(),
        }
    }

    /// Returns `true` if the record changed
    pub fn save_progress(&mut self, player: &str, level_id: &str) -> bool {
        let entry = self
            .progress
            .entry(player.to_string())
            .or_insert_with(|| StoredProgress::Completed(Progress::default()));

        if !matches!(entry, StoredProgress::Completed(_)) {
            warn!(player, "replacing unreadable progress record");
            *entry = StoredProgress::Completed(Progress::default());
        }

        match entry {
            StoredProgress::Completed(progress) => {
                let added = progress.completed.insert(level_id.to_string());
                if added {
                    debug!(player, level_id, "level recorded as completed");
                }
                added
            }
            StoredProgress::Legacy(_) | StoredProgress::Corrupt(_) => false,
        }
    }

    pub fn load_guesses(&self, level_id: &str) -> Vec<String> {
        self.guesses.get(level_id).cloned().unwrap_or_default()
    }

    pub fn save_guess(&mut self, level_id: &str, guess: &str) {
        self.guesses
            .entry(level_id.to_string())
            .or_default()
            .push(guess.to_string());
    }

    /// Returns `true` if there was a history to clear
    pub fn clear_guesses(&mut self, level_id: &str) -> bool {
        self.guesses.remove(level_id).is_some()
    }

    pub fn load_custom_word(&self, game_id: &str) -> Option<String> {
        self.custom_games.get(game_id).cloned()
    }

    pub fn save_custom_word(&mut self, game_id: &str, word: &str) {
        self.custom_games
            .insert(game_id.to_string(), word.to_ascii_uppercase());
    }

    pub fn migrate_legacy_progress(&mut self, catalog: &LevelCatalog) -> usize {
        let mut migrated = 0;
        for (player, stored) in &mut self.progress {
            let StoredProgress::Legacy(unlocked) = *stored else {
                continue;
            };
            let Some(levels) = catalog.levels(player) else {
                warn!(player = %player, "legacy progress for a player missing from the catalog");
                continue;
            };

            let take = usize::try_from(unlocked).unwrap_or(usize::MAX);
            let completed = levels.iter().take(take).map(|l| l.id.clone()).collect();
            *stored = StoredProgress::Completed(Progress { completed });
            info!(player = %player, unlocked, "migrated legacy progress record");
            migrated += 1;
        }
        migrated
    }
}

fn section<T: serde::de::DeserializeOwned + Default>(root: &Map<String, Value>, key: &str) -> T {
    let Some(value) = root.get(key) else {
        return T::default();
    };
    serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!(section = key, error = %e, "ignoring unreadable store section");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::builtin_catalog;

    #[test]
    fn progress_only_grows() {
        let mut data = StoreData::default();
        assert!(data.save_progress("Mia", "mia-01"));
        assert!(data.save_progress("Mia", "mia-02"));
        assert!(!data.save_progress("Mia", "mia-01"));

        let progress = data.load_progress("Mia");
        assert_eq!(progress.completed_count(), 2);
        assert!(progress.is_completed("mia-01"));
        assert!(data.load_progress("Hannah").completed.is_empty());
    }

    #[test]
    fn guesses_append_and_clear() {
        let mut data = StoreData::default();
        data.save_guess("mia-01", "CRANE");
        data.save_guess("mia-01", "SLATE");
        assert_eq!(data.load_guesses("mia-01"), ["CRANE", "SLATE"]);

        assert!(data.clear_guesses("mia-01"));
        assert!(data.load_guesses("mia-01").is_empty());
        assert!(!data.clear_guesses("mia-01"));
    }

    #[test]
    fn decodes_both_progress_shapes() {
        let data = StoreData::from_json(
            r#"{"progress": {"Mia": 2, "Hannah": {"completed": ["hannah-01"]}}}"#,
        );
        assert_eq!(data.progress.get("Mia"), Some(&StoredProgress::Legacy(2)));
        assert!(data.load_progress("Hannah").is_completed("hannah-01"));
        // unmigrated legacy records read as empty
        assert!(data.load_progress("Mia").completed.is_empty());
    }

    #[test]
    fn migrates_legacy_index_to_ids() {
        let mut data = StoreData::from_json(r#"{"progress": {"Mia": 2, "Ghost": 1}}"#);
        let migrated = data.migrate_legacy_progress(&builtin_catalog());
        assert_eq!(migrated, 1);

        let progress = data.load_progress("Mia");
        assert!(progress.is_completed("mia-01"));
        assert!(progress.is_completed("mia-02"));
        assert!(!progress.is_completed("mia-03"));

        // unknown players are left untouched
        assert_eq!(data.progress.get("Ghost"), Some(&StoredProgress::Legacy(1)));

        // a second run has nothing to do
        assert_eq!(data.migrate_legacy_progress(&builtin_catalog()), 0);
    }

    #[test]
    fn legacy_index_beyond_catalog_completes_everything() {
        let mut data = StoreData::from_json(r#"{"progress": {"Hannah": 99}}"#);
        data.migrate_legacy_progress(&builtin_catalog());
        let catalog = builtin_catalog();
        let levels = catalog.levels("Hannah").unwrap();
        assert_eq!(data.load_progress("Hannah").first_open(levels), levels.len());
    }

    #[test]
    fn corrupt_documents_fall_back_to_empty() {
        assert_eq!(StoreData::from_json("not json"), StoreData::default());
        assert_eq!(StoreData::from_json("[1, 2]"), StoreData::default());
    }

    #[test]
    fn corrupt_section_keeps_the_others() {
        let data = StoreData::from_json(
            r#"{"progress": {"Mia": {"completed": ["mia-01"]}}, "guesses": "oops"}"#,
        );
        assert!(data.load_progress("Mia").is_completed("mia-01"));
        assert!(data.guesses.is_empty());
    }

    #[test]
    fn corrupt_progress_entry_is_isolated() {
        let mut data = StoreData::from_json(
            r#"{"progress": {"Mia": "garbage", "Hannah": {"completed": ["hannah-01"]}}}"#,
        );
        assert!(data.load_progress("Mia").completed.is_empty());
        assert!(data.load_progress("Hannah").is_completed("hannah-01"));

        assert!(data.save_progress("Mia", "mia-01"));
        assert!(data.load_progress("Mia").is_completed("mia-01"));
    }

    #[test]
    fn custom_words_are_uppercased() {
        let mut data = StoreData::default();
        data.save_custom_word("AB12CD", "hot chocolate");
        assert_eq!(data.load_custom_word("AB12CD").as_deref(), Some("HOT CHOCOLATE"));
        assert_eq!(data.load_custom_word("ZZZZZZ"), None);
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut data = StoreData::default();
        data.save_progress("Mia", "mia-01");
        data.save_guess("mia-02", "CRANE");
        data.save_custom_word("AB12CD", "LEMON");

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("customGames"));
        assert_eq!(StoreData::from_json(&json), data);
    }
}
