//! Catalog and word list loading
//!
//! Catalog files are JSON documents shaped like
//! `{"players": [{"name": "Mia", "levels": [{"id": "mia-01", "word": "APPLE"}]}]}`.
//! Word lists are plain text, one word per line.

use super::{LevelCatalog, PlayerLevels};
use crate::Result;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct CatalogFile {
    players: Vec<PlayerLevels>,
}

/// Parse and validate a catalog from JSON text
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the catalog fails validation.
pub fn catalog_from_json(json: &str) -> Result<LevelCatalog> {
    let file: CatalogFile = serde_json::from_str(json)?;
    LevelCatalog::new(file.players)
}

/// Load a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or fails
/// catalog validation.
///
/// # Examples
/// ```no_run
/// use wordle_levels::levels::loader::load_catalog;
///
/// let catalog = load_catalog("levels.json").unwrap();
/// println!("Players: {:?}", catalog.players().collect::<Vec<_>>());
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<LevelCatalog> {
    let content = fs::read_to_string(path)?;
    catalog_from_json(&content)
}

/// Load a word list into an uppercase set, skipping blank lines and
/// anything that is not purely alphabetic
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<FxHashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(word_set_from_lines(&content))
}

/// Convert word list text to an uppercase set
#[must_use]
pub fn word_set_from_lines(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase)
        .collect()
}
