//! Per-player completion summary

use crate::levels::CUSTOM_PLAYER;
use crate::session::{Game, LevelStatus, WordOracle};
use crate::store::Store;

/// Level statuses for every catalog player, shared custom games excluded
#[must_use]
pub fn collect_progress<S: Store, O: WordOracle>(game: &Game<S, O>) -> Vec<(String, Vec<LevelStatus>)> {
    game.catalog()
        .players()
        .filter(|player| *player != CUSTOM_PLAYER)
        .map(|player| (player.to_string(), game.level_statuses(player)))
        .collect()
}
