//! Game controller
//!
//! [`Game`] is the single owner of the level catalog, the store, the word
//! oracle and the [`Session`]. Every player action goes through it.
//!
//! Submitting a guess applies the whole transition immediately and then
//! locks input. The renderer animates the returned [`Reveal`] for
//! `Reveal::lock` and calls [`Game::finish_reveal`] to unlock.

use super::oracle::{AcceptAll, WordOracle};
use super::state::{MessageStyle, Outcome, Phase, Session};
use super::RevealTiming;
use crate::core::{Score, TargetLayout};
use crate::levels::custom::{self, CUSTOM_PLAYER};
use crate::levels::LevelCatalog;
use crate::store::{Progress, Store};
use crate::{Error, Result};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A submitted guess, ready to be animated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Board row the guess was typed into
    pub row: usize,
    pub guess: String,
    pub score: Score,
    pub outcome: Outcome,
    /// How long input stays locked for the animation
    pub lock: Duration,
}

/// Result of [`Game::submit_guess`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing happened: locked, not in progress, or the row is incomplete
    Ignored,
    /// The word oracle refused the guess; the row is left as typed
    Rejected { guess: String },
    Revealed(Reveal),
}

/// How one level shows up in a player's level panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStatus {
    pub id: String,
    pub completed: bool,
    pub active: bool,
}

/// Owns everything needed to play
pub struct Game<S: Store, O: WordOracle = AcceptAll> {
    catalog: LevelCatalog,
    store: S,
    oracle: O,
    session: Session,
    timing: RevealTiming,
}

impl<S: Store> Game<S, AcceptAll> {
    /// Create a game that accepts every guess
    pub fn new(catalog: LevelCatalog, store: S) -> Self {
        Self::with_oracle(catalog, store, AcceptAll)
    }
}

impl<S: Store, O: WordOracle> Game<S, O> {
    /// Create a game, migrating any legacy progress records in `store`
    pub fn with_oracle(catalog: LevelCatalog, mut store: S, oracle: O) -> Self {
        let migrated = store.migrate_legacy_progress(&catalog);
        if migrated > 0 {
            info!(migrated, "converted legacy progress records");
        }

        Self {
            catalog,
            store,
            oracle,
            session: Session::new(),
            timing: RevealTiming::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Saved progress for `player`
    pub fn progress(&self, player: &str) -> Progress {
        self.store.load_progress(player)
    }

    /// Level panel entries for `player`, in catalog order
    pub fn level_statuses(&self, player: &str) -> Vec<LevelStatus> {
        let progress = self.store.load_progress(player);
        let active = (self.session.player() == Some(player) && self.session.level_id().is_some())
            .then(|| self.session.level_index());

        self.catalog
            .levels(player)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, level)| LevelStatus {
                id: level.id.clone(),
                completed: progress.is_completed(&level.id),
                active: active == Some(i),
            })
            .collect()
    }

    /// Start level `index` of `player`
    ///
    /// An unknown player or an index past the end shows "No more levels." and
    /// ends the game instead of failing. Saved guesses for the level are
    /// replayed so a revisited level looks the way it was left.
    pub fn start_level(&mut self, player: &str, index: usize, reset_restart_count: bool) {
        if reset_restart_count {
            self.session.reset_restart_count();
        }

        let Some(level) = self.catalog.level(player, index).cloned() else {
            info!(player, index, "no more levels");
            self.session.no_more_levels(player, index);
            return;
        };

        let layout = match level.layout() {
            Ok(layout) => layout,
            Err(e) => {
                warn!(player, level_id = %level.id, error = %e, "level has an unusable target");
                self.session.no_more_levels(player, index);
                return;
            }
        };

        self.session.begin(player, index, level.id, layout);
        self.replay_saved_guesses();
    }

    fn replay_saved_guesses(&mut self) {
        let Some(level_id) = self.session.level_id().map(str::to_owned) else {
            return;
        };
        let saved = self.store.load_guesses(&level_id);
        if saved.is_empty() {
            return;
        }
        debug!(level_id = %level_id, count = saved.len(), "replaying saved guesses");

        for guess in saved {
            if self.session.phase() != Phase::InProgress {
                break;
            }
            let Some(layout) = self.session.layout() else {
                break;
            };

            let guess = guess.to_ascii_uppercase();
            if guess.len() != layout.letter_count() || !guess.chars().all(|c| c.is_ascii_alphabetic())
            {
                warn!(level_id = %level_id, guess = %guess, "skipping saved guess that does not fit");
                continue;
            }

            let score = Score::for_layout(&guess, layout);
            self.session.fill_row(&guess);
            self.session.apply_guess(&guess, score);
        }

        self.announce_phase();
    }

    pub fn add_letter(&mut self, letter: char) -> bool {
        self.session.add_letter(letter)
    }

    pub fn delete_letter(&mut self) -> bool {
        self.session.delete_letter()
    }

    /// Submit the current row
    ///
    /// On success the guess is appended to the saved history, scored, and
    /// the state machine moves (a win records progress right away). Input
    /// then stays locked until [`Game::finish_reveal`].
    pub fn submit_guess(&mut self) -> Submission {
        if self.session.input_locked() {
            return Submission::Ignored;
        }
        let Some(guess) = self.session.current_guess() else {
            return Submission::Ignored;
        };
        let (Some(level_id), Some(layout)) = (
            self.session.level_id().map(str::to_owned),
            self.session.layout().cloned(),
        ) else {
            return Submission::Ignored;
        };

        if !self.is_valid_guess(&guess, &layout) {
            debug!(guess = %guess, "guess rejected by word oracle");
            self.session
                .set_message("Not a real word", MessageStyle::Error);
            return Submission::Rejected { guess };
        }

        self.store.save_guess(&level_id, &guess);

        let row = self.session.current_row();
        let score = Score::for_layout(&guess, &layout);
        let outcome = self.session.apply_guess(&guess, score.clone());
        debug!(row, guess = %guess, emoji = %score.to_emoji(), ?outcome, "guess scored");

        match outcome {
            Outcome::Won => {
                info!(level_id = %level_id, guesses = row + 1, "level won");
                self.record_completion(&level_id);
            }
            Outcome::Lost => info!(level_id = %level_id, "level lost"),
            Outcome::Advance { .. } => {}
        }

        self.session.clear_message();
        self.session.lock_input();

        Submission::Revealed(Reveal {
            row,
            guess,
            score,
            outcome,
            lock: self.timing.lock_for(layout.letter_count()),
        })
    }

    /// Signal from the renderer that the reveal animation is over
    ///
    /// Returns `false` if input was not locked.
    pub fn finish_reveal(&mut self) -> bool {
        if !self.session.input_locked() {
            return false;
        }
        self.session.unlock_input();
        self.announce_phase();
        true
    }

    /// Start the lost level again with a fresh history
    ///
    /// Only valid after a loss. The restart count carries over; from the
    /// third restart on, reveal and continue become available.
    pub fn restart_level(&mut self) -> bool {
        if !self.session.controls().restart {
            return false;
        }
        let Some(player) = self.session.player().map(str::to_owned) else {
            return false;
        };

        if let Some(level_id) = self.session.level_id().map(str::to_owned) {
            self.store.clear_guesses(&level_id);
        }
        let restarts = self.session.count_restart();
        info!(player = %player, index = self.session.level_index(), restarts, "level restarted");

        self.start_level(&player, self.session.level_index(), false);
        true
    }

    /// Mark the current level complete and move to the next one
    ///
    /// Available after a win or after enough restarts.
    pub fn continue_level(&mut self) -> bool {
        if !self.session.controls().continue_level {
            return false;
        }
        let (Some(player), Some(level_id)) = (
            self.session.player().map(str::to_owned),
            self.session.level_id().map(str::to_owned),
        ) else {
            return false;
        };

        self.record_completion(&level_id);
        self.start_level(&player, self.session.level_index() + 1, true);
        true
    }

    /// Show the target phrase, if revealing is currently allowed
    pub fn reveal_word(&mut self) -> Option<String> {
        if !self.session.controls().reveal {
            return None;
        }
        let phrase = self.session.layout()?.phrase().to_string();
        self.session
            .set_message(format!("Word was: {phrase}"), MessageStyle::Info);
        Some(phrase)
    }

    /// Store `word` as a shareable custom game and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if `word` is not a valid target phrase.
    pub fn create_custom_game<R: Rng + ?Sized>(&mut self, word: &str, rng: &mut R) -> Result<String> {
        let layout = TargetLayout::parse(word)?;
        let id = custom::generate_id(rng);
        self.store.save_custom_word(&id, layout.phrase());
        info!(id = %id, "custom game created");
        Ok(id)
    }

    /// Start the custom game stored under `game_id`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCustomGame` if this device has no word for the
    /// id (the session shows a message saying so), or an error if the stored
    /// word is unusable.
    pub fn open_custom_game(&mut self, game_id: &str) -> Result<()> {
        let Some(word) = self.store.load_custom_word(game_id) else {
            self.session.set_message(
                "This game was created on another device.",
                MessageStyle::Error,
            );
            return Err(Error::UnknownCustomGame(game_id.to_string()));
        };

        self.catalog.insert_custom(game_id, &word)?;
        self.start_level(CUSTOM_PLAYER, 0, true);
        Ok(())
    }

    fn is_valid_guess(&self, guess: &str, layout: &TargetLayout) -> bool {
        layout
            .split_guess(guess)
            .is_some_and(|words| words.iter().all(|w| self.oracle.is_valid_word(w)))
    }

    fn record_completion(&mut self, level_id: &str) {
        let Some(player) = self.session.player() else {
            return;
        };
        if player == CUSTOM_PLAYER {
            return;
        }
        self.store.save_progress(player, level_id);
    }

    fn announce_phase(&mut self) {
        match self.session.phase() {
            Phase::Won => self.session.set_message("Nice!", MessageStyle::Success),
            Phase::Lost => self.session.set_message("Try again.", MessageStyle::Error),
            Phase::Idle | Phase::InProgress | Phase::NoMoreLevels => {}
        }
    }
}
