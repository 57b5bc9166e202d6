//! Runtime configuration
//!
//! Collects the file locations and tunables the binary hands to the game.

use crate::levels::{LevelCatalog, loader::load_catalog};
use crate::session::{AcceptAll, Dictionary, Game, OracleType, RevealTiming};
use crate::store::JsonFileStore;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the persisted store
pub const DEFAULT_STORE_PATH: &str = "wordle_levels.json";

/// Default base for share links
pub const DEFAULT_BASE_URL: &str = "https://wordle-levels.app/";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub store_path: PathBuf,
    /// Catalog file replacing the built-in levels
    pub levels_path: Option<PathBuf>,
    /// Word list; without one every guess is accepted
    pub dictionary_path: Option<PathBuf>,
    pub base_url: String,
    pub timing: RevealTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            levels_path: None,
            dictionary_path: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timing: RevealTiming::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    #[must_use]
    pub fn with_levels(mut self, path: Option<PathBuf>) -> Self {
        self.levels_path = path;
        self
    }

    #[must_use]
    pub fn with_dictionary(mut self, path: Option<PathBuf>) -> Self {
        self.dictionary_path = path;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The configured catalog, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn catalog(&self) -> Result<LevelCatalog> {
        match &self.levels_path {
            Some(path) => {
                let catalog = load_catalog(path)?;
                info!(path = %path.display(), players = catalog.players().count(), "loaded level catalog");
                Ok(catalog)
            }
            None => Ok(LevelCatalog::default()),
        }
    }

    /// The configured word oracle
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read.
    pub fn oracle(&self) -> Result<OracleType> {
        match &self.dictionary_path {
            Some(path) => {
                let dictionary = Dictionary::load(path)?;
                info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
                Ok(OracleType::Dictionary(dictionary))
            }
            None => Ok(OracleType::AcceptAll(AcceptAll)),
        }
    }

    /// Open the store file
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store file cannot be read.
    pub fn store(&self) -> Result<JsonFileStore> {
        JsonFileStore::open(&self.store_path)
    }

    /// Assemble a game from catalog, store and oracle
    ///
    /// # Errors
    ///
    /// Returns an error if any configured file cannot be loaded.
    pub fn build_game(&self) -> Result<Game<JsonFileStore, OracleType>> {
        Ok(Game::with_oracle(self.catalog()?, self.store()?, self.oracle()?).with_timing(self.timing))
    }

    /// Check that `player` exists in the configured catalog
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPlayer` if it does not.
    pub fn require_player(catalog: &LevelCatalog, player: &str) -> Result<()> {
        if catalog.levels(player).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownPlayer(player.to_string()))
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::fs;

    #[test]
    fn defaults() {
        let config = GameConfig::new();
        assert_eq!(config.store_path(), Path::new(DEFAULT_STORE_PATH));
        assert!(config.levels_path.is_none());
        assert!(config.dictionary_path.is_none());
        assert_eq!(config.timing, RevealTiming::default());
    }

    #[test]
    fn builds_game_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let levels = dir.path().join("levels.json");
        let words = dir.path().join("words.txt");
        fs::write(
            &levels,
            r#"{"players": [{"name": "Solo", "levels": [{"id": "s1", "word": "CRANE"}]}]}"#,
        )
        .unwrap();
        fs::write(&words, "crane\nslate\n").unwrap();

        let config = GameConfig::new()
            .with_store(dir.path().join("store.json"))
            .with_levels(Some(levels))
            .with_dictionary(Some(words))
            .with_timing(RevealTiming::instant());

        let mut game = config.build_game().unwrap();
        assert_eq!(game.catalog().players().collect::<Vec<_>>(), ["Solo"]);

        game.start_level("Solo", 0, true);
        for ch in "SLATE".chars() {
            game.add_letter(ch);
        }
        assert!(matches!(
            game.submit_guess(),
            crate::session::Submission::Revealed(_)
        ));
        assert_eq!(game.store().load_guesses("s1"), ["SLATE"]);
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let config = GameConfig::new().with_levels(Some(PathBuf::from("/no/such/levels.json")));
        assert!(matches!(config.catalog(), Err(Error::Io(_))));
    }

    #[test]
    fn unknown_player() {
        let catalog = LevelCatalog::default();
        assert!(GameConfig::require_player(&catalog, "Mia").is_ok());
        assert!(matches!(
            GameConfig::require_player(&catalog, "Nobody"),
            Err(Error::UnknownPlayer(_))
        ));
    }
}
