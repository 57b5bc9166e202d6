//! Wordle Levels
//!
//! A level-based word guessing game: each player works through an ordered
//! list of target words and phrases, with saved progress, guess history and
//! shareable custom games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_levels::levels::LevelCatalog;
//! use wordle_levels::session::{Game, Phase, Submission};
//! use wordle_levels::store::MemoryStore;
//!
//! let mut game = Game::new(LevelCatalog::default(), MemoryStore::new());
//! game.start_level("Mia", 0, true);
//!
//! for letter in "APPLE".chars() {
//!     game.add_letter(letter);
//! }
//! assert!(matches!(game.submit_guess(), Submission::Revealed(_)));
//! game.finish_reveal();
//! assert_eq!(game.session().phase(), Phase::Won);
//! ```

// Core domain types
pub mod core;

// Level catalog and custom games
pub mod levels;

// Persistence
pub mod store;

// Level session and game controller
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
