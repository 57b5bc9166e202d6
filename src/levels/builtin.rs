//! Built-in levels for the two players

use super::{Level, LevelCatalog, PlayerLevels};

const MIA: &[(&str, &str)] = &[
    ("mia-01", "APPLE"),
    ("mia-02", "CRANE"),
    ("mia-03", "PLANE"),
    ("mia-04", "LEMON TART"),
];

const HANNAH: &[(&str, &str)] = &[
    ("hannah-01", "GRAPE"),
    ("hannah-02", "BRICK"),
    ("hannah-03", "SMILE"),
    ("hannah-04", "GAVIN AND STACEY"),
];

fn player(name: &str, levels: &[(&str, &str)]) -> PlayerLevels {
    PlayerLevels {
        name: name.to_string(),
        levels: levels
            .iter()
            .map(|&(id, word)| Level::new(id, word))
            .collect(),
    }
}

/// The catalog shipped with the game
#[must_use]
pub fn builtin_catalog() -> LevelCatalog {
    LevelCatalog {
        players: vec![player("Mia", MIA), player("Hannah", HANNAH)],
    }
}
