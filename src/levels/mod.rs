//! Level catalog
//!
//! Each player owns an ordered list of levels. The built-in catalog is
//! compiled into the binary; a catalog file can replace it, and shared custom
//! games add a synthetic one-level player.

mod builtin;
pub mod custom;
pub mod loader;

use crate::core::TargetLayout;
use crate::{Error, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

pub use builtin::builtin_catalog;
pub use custom::CUSTOM_PLAYER;

/// A single puzzle: a target phrase with an id unique across the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub word: String,
}

impl Level {
    #[must_use]
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
        }
    }

    /// Slot layout of this level's target
    ///
    /// # Errors
    /// Returns an error if the word is not a valid target phrase.
    pub fn layout(&self) -> Result<TargetLayout> {
        Ok(TargetLayout::parse(&self.word)?)
    }
}

/// Ordered levels belonging to one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLevels {
    pub name: String,
    pub levels: Vec<Level>,
}

/// Mapping from player name to that player's ordered levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    players: Vec<PlayerLevels>,
}

impl LevelCatalog {
    /// Build a validated catalog
    ///
    /// # Errors
    /// Returns `Error::InvalidCatalog` for duplicate or reserved player
    /// names, empty or duplicate level ids (ids are shared by every player,
    /// since guess history is keyed by id alone), or unusable target words.
    pub fn new(players: Vec<PlayerLevels>) -> Result<Self> {
        let catalog = Self { players };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut names = FxHashSet::default();
        let mut ids = FxHashSet::default();
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(invalid("player name is empty"));
            }
            if player.name == CUSTOM_PLAYER {
                return Err(invalid(format!("player name {CUSTOM_PLAYER} is reserved")));
            }
            if !names.insert(player.name.as_str()) {
                return Err(invalid(format!("duplicate player {}", player.name)));
            }

            for level in &player.levels {
                if level.id.trim().is_empty() {
                    return Err(invalid(format!("empty level id for {}", player.name)));
                }
                if level.id.starts_with(custom::CUSTOM_ID_PREFIX) {
                    return Err(invalid(format!(
                        "level id {} uses the reserved {} prefix",
                        level.id,
                        custom::CUSTOM_ID_PREFIX
                    )));
                }
                if !ids.insert(level.id.as_str()) {
                    return Err(invalid(format!(
                        "duplicate level id {} (found again under {})",
                        level.id, player.name
                    )));
                }
                TargetLayout::parse(&level.word)
                    .map_err(|e| invalid(format!("level {}: {e}", level.id)))?;
            }
        }
        Ok(())
    }

    /// Player names in catalog order
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }

    /// Levels for `player`, `None` if the player is unknown
    #[must_use]
    pub fn levels(&self, player: &str) -> Option<&[Level]> {
        self.players
            .iter()
            .find(|p| p.name == player)
            .map(|p| p.levels.as_slice())
    }

    /// Level at `index` for `player`
    #[must_use]
    pub fn level(&self, player: &str, index: usize) -> Option<&Level> {
        self.levels(player).and_then(|levels| levels.get(index))
    }

    /// Number of levels for `player` (0 if unknown)
    #[must_use]
    pub fn level_count(&self, player: &str) -> usize {
        self.levels(player).map_or(0, <[Level]>::len)
    }

    /// Position of the level with `id` in `player`'s list
    #[must_use]
    pub fn position(&self, player: &str, id: &str) -> Option<usize> {
        self.levels(player)
            .and_then(|levels| levels.iter().position(|l| l.id == id))
    }

    /// Replace (or add) the synthetic custom player with a single level
    ///
    /// # Errors
    /// Returns an error if `word` is not a valid target phrase.
    pub fn insert_custom(&mut self, game_id: &str, word: &str) -> Result<()> {
        let level = custom::custom_level(game_id, word)?;
        self.players.retain(|p| p.name != CUSTOM_PLAYER);
        self.players.push(PlayerLevels {
            name: CUSTOM_PLAYER.to_string(),
            levels: vec![level],
        });
        Ok(())
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        builtin_catalog()
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidCatalog {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, levels: &[(&str, &str)]) -> PlayerLevels {
        PlayerLevels {
            name: name.to_string(),
            levels: levels.iter().map(|(id, word)| Level::new(*id, *word)).collect(),
        }
    }

    #[test]
    fn lookup_by_player_and_index() {
        let catalog = LevelCatalog::new(vec![
            player("Mia", &[("m1", "APPLE"), ("m2", "CRANE")]),
            player("Hannah", &[("h1", "GRAPE")]),
        ])
        .unwrap();

        assert_eq!(catalog.players().collect::<Vec<_>>(), ["Mia", "Hannah"]);
        assert_eq!(catalog.level_count("Mia"), 2);
        assert_eq!(catalog.level("Mia", 1).map(|l| l.word.as_str()), Some("CRANE"));
        assert_eq!(catalog.level("Mia", 2), None);
        assert_eq!(catalog.level("Nobody", 0), None);
        assert_eq!(catalog.position("Hannah", "h1"), Some(0));
        assert_eq!(catalog.level_count("Nobody"), 0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = LevelCatalog::new(vec![player("Mia", &[("x", "APPLE"), ("x", "CRANE")])]);
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn rejects_same_id_across_players() {
        let result = LevelCatalog::new(vec![
            player("Mia", &[("x", "APPLE")]),
            player("Hannah", &[("x", "GRAPE")]),
        ]);
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn rejects_reserved_custom_names() {
        let player_named_custom = LevelCatalog::new(vec![player(CUSTOM_PLAYER, &[("c1", "APPLE")])]);
        assert!(matches!(player_named_custom, Err(Error::InvalidCatalog { .. })));

        let custom_style_id = LevelCatalog::new(vec![player("Mia", &[("custom-ABC123", "APPLE")])]);
        assert!(matches!(custom_style_id, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn rejects_duplicate_players_and_bad_words() {
        let dup = LevelCatalog::new(vec![player("Mia", &[]), player("Mia", &[])]);
        assert!(dup.is_err());

        let bad = LevelCatalog::new(vec![player("Mia", &[("m1", "N0PE")])]);
        assert!(bad.is_err());
    }

    #[test]
    fn insert_custom_replaces_previous() {
        let mut catalog = builtin_catalog();
        catalog.insert_custom("ABC123", "first").unwrap();
        catalog.insert_custom("XYZ789", "second").unwrap();

        let levels = catalog.levels(CUSTOM_PLAYER).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].id, "custom-XYZ789");
        assert_eq!(levels[0].word, "SECOND");
        assert_eq!(catalog.players().filter(|p| *p == CUSTOM_PLAYER).count(), 1);
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert!(catalog.validate().is_ok());
        assert!(catalog.level_count("Mia") >= 3);
        assert!(catalog.level_count("Hannah") >= 3);
    }
}
