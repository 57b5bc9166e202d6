//! JSON document store on disk
//!
//! Stands in for browser local storage: the whole document is read once at
//! open and rewritten after every change.

use super::data::StoreData;
use super::{Progress, Store};
use crate::Result;
use crate::levels::LevelCatalog;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file starts empty. Unreadable or malformed content is logged
    /// and replaced by an empty document on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(text) => StoreData::from_json(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file yet, starting empty");
                StoreData::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document, replacing the previous file atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    // Writes are best-effort: a failed flush is logged and play continues.
    fn persist(&self) {
        if let Err(e) = self.flush() {
            warn!(path = %self.path.display(), error = %e, "failed to write store");
        }
    }
}

impl Store for JsonFileStore {
    fn load_progress(&self, player: &str) -> Progress {
        self.data.load_progress(player)
    }

    fn save_progress(&mut self, player: &str, level_id: &str) {
        if self.data.save_progress(player, level_id) {
            self.persist();
        }
    }

    fn load_guesses(&self, level_id: &str) -> Vec<String> {
        self.data.load_guesses(level_id)
    }

    fn save_guess(&mut self, level_id: &str, guess: &str) {
        self.data.save_guess(level_id, guess);
        self.persist();
    }

    fn clear_guesses(&mut self, level_id: &str) {
        if self.data.clear_guesses(level_id) {
            self.persist();
        }
    }

    fn load_custom_word(&self, game_id: &str) -> Option<String> {
        self.data.load_custom_word(game_id)
    }

    fn save_custom_word(&mut self, game_id: &str, word: &str) {
        self.data.save_custom_word(game_id, word);
        self.persist();
    }

    fn migrate_legacy_progress(&mut self, catalog: &LevelCatalog) -> usize {
        let migrated = self.data.migrate_legacy_progress(catalog);
        if migrated > 0 {
            self.persist();
        }
        migrated
    }
}
