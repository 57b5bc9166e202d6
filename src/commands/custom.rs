//! Creating and opening shared custom games

use crate::levels::custom::{parse_share_link, share_link};
use crate::session::{Game, WordOracle};
use crate::store::Store;
use crate::{Error, Result};
use rand::Rng;

/// A stored custom game and the link that opens it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGame {
    pub id: String,
    pub link: String,
}

/// Store `word` as a custom game and build its share link
///
/// # Errors
///
/// Returns an error if `word` is not a valid target phrase.
pub fn create_game<S: Store, O: WordOracle, R: Rng + ?Sized>(
    game: &mut Game<S, O>,
    word: &str,
    base_url: &str,
    rng: &mut R,
) -> Result<CreatedGame> {
    let id = game.create_custom_game(word, rng)?;
    let link = share_link(base_url, &id);
    Ok(CreatedGame { id, link })
}

/// Open a custom game from a share link or bare id
///
/// # Errors
///
/// Returns `Error::UnknownCustomGame` if the input carries no id or the id
/// is not stored on this device.
pub fn open_game<S: Store, O: WordOracle>(game: &mut Game<S, O>, link_or_id: &str) -> Result<String> {
    let id = parse_share_link(link_or_id)
        .ok_or_else(|| Error::UnknownCustomGame(link_or_id.trim().to_string()))?;
    game.open_custom_game(&id)?;
    Ok(id)
}
