//! Level session state
//!
//! [`Session`] is plain data plus the transitions that need no collaborators:
//! cursor movement, applying a scored guess, and the input lock. Anything that
//! touches the catalog, the store or the word oracle lives in [`super::Game`].

use super::board::GuessRow;
use crate::core::{KeyStates, MAX_GUESSES, Score, TargetLayout};
use tracing::debug;

/// Restarts of one level after which reveal and continue unlock
pub const RESTARTS_BEFORE_SKIP: u32 = 3;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No level has been started
    Idle,
    InProgress,
    Won,
    Lost,
    /// The requested level does not exist
    NoMoreLevels,
}

/// Result of applying a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Play moves on to `next_row`
    Advance { next_row: usize },
    Won,
    Lost,
}

/// Actions the renderer may offer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub restart: bool,
    pub reveal: bool,
    pub continue_level: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A message for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

/// State of the level being played
#[derive(Debug, Clone)]
pub struct Session {
    player: Option<String>,
    level_index: usize,
    level_id: Option<String>,
    layout: Option<TargetLayout>,
    rows: Vec<GuessRow>,
    row: usize,
    // slot index into the layout, spaces included
    col: usize,
    restart_count: u32,
    phase: Phase,
    input_locked: bool,
    keys: KeyStates,
    message: Option<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: None,
            level_index: 0,
            level_id: None,
            layout: None,
            rows: Vec::new(),
            row: 0,
            col: 0,
            restart_count: 0,
            phase: Phase::Idle,
            input_locked: false,
            keys: KeyStates::new(),
            message: None,
        }
    }

    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    #[must_use]
    pub fn level_id(&self) -> Option<&str> {
        self.level_id.as_deref()
    }

    #[must_use]
    pub const fn layout(&self) -> Option<&TargetLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Row being typed into; equals `MAX_GUESSES` once every row is used
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Cursor position as a slot index (space slots included)
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn restart_count(&self) -> u32 {
        self.restart_count
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost | Phase::NoMoreLevels)
    }

    #[must_use]
    pub const fn input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub const fn key_states(&self) -> &KeyStates {
        &self.keys
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Actions currently available to the player
    #[must_use]
    pub fn controls(&self) -> Controls {
        if self.input_locked {
            return Controls::default();
        }

        let has_level = matches!(self.phase, Phase::InProgress | Phase::Won | Phase::Lost);
        let can_skip =
            has_level && (self.phase == Phase::Won || self.restart_count >= RESTARTS_BEFORE_SKIP);

        Controls {
            restart: self.phase == Phase::Lost,
            reveal: can_skip,
            continue_level: can_skip,
        }
    }

    /// Guess typed into the current row, `None` while incomplete
    #[must_use]
    pub fn current_guess(&self) -> Option<String> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.rows.get(self.row).and_then(GuessRow::guess)
    }

    /// Write `letter` into the next letter cell of the current row
    ///
    /// Returns `false` (and changes nothing) when input is locked, the level
    /// is not in progress, the character is not a letter, or the row is full.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.input_locked || self.phase != Phase::InProgress || !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(layout) = &self.layout else {
            return false;
        };
        let Some(row) = self.rows.get_mut(self.row) else {
            return false;
        };
        if row.filled() >= layout.letter_count() {
            return false;
        }

        let mut col = self.col;
        while layout.is_space(col) {
            col += 1;
        }
        let Some(index) = layout.letter_index(col) else {
            return false;
        };

        row.set(index, Some(letter.to_ascii_uppercase()));
        self.col = col + 1;
        true
    }

    /// Clear the letter cell before the cursor, stepping back over spaces
    pub fn delete_letter(&mut self) -> bool {
        if self.input_locked || self.phase != Phase::InProgress || self.col == 0 {
            return false;
        }
        let Some(layout) = &self.layout else {
            return false;
        };
        let Some(row) = self.rows.get_mut(self.row) else {
            return false;
        };

        let mut col = self.col - 1;
        while col > 0 && layout.is_space(col) {
            col -= 1;
        }
        let Some(index) = layout.letter_index(col) else {
            return false;
        };

        row.set(index, None);
        self.col = col;
        true
    }

    pub(crate) fn begin(
        &mut self,
        player: &str,
        level_index: usize,
        level_id: String,
        layout: TargetLayout,
    ) {
        debug!(player, level_index, level_id = %level_id, "level started");
        self.player = Some(player.to_string());
        self.level_index = level_index;
        self.level_id = Some(level_id);
        self.rows = vec![GuessRow::new(layout.letter_count()); MAX_GUESSES];
        self.layout = Some(layout);
        self.row = 0;
        self.col = 0;
        self.phase = Phase::InProgress;
        self.input_locked = false;
        self.keys.clear();
        self.message = None;
    }

    pub(crate) fn no_more_levels(&mut self, player: &str, level_index: usize) {
        debug!(player, level_index, "no level at index");
        self.player = Some(player.to_string());
        self.level_index = level_index;
        self.level_id = None;
        self.layout = None;
        self.rows.clear();
        self.row = 0;
        self.col = 0;
        self.phase = Phase::NoMoreLevels;
        self.input_locked = false;
        self.keys.clear();
        self.set_message("No more levels.", MessageStyle::Info);
    }

    /// Write a whole guess into the current row (used when replaying history)
    pub(crate) fn fill_row(&mut self, guess: &str) {
        if let Some(row) = self.rows.get_mut(self.row) {
            row.fill(guess);
            self.col = self.layout.as_ref().map_or(0, |l| l.slots().len());
        }
    }

    /// Record a scored guess on the current row and move the state machine
    pub(crate) fn apply_guess(&mut self, guess: &str, score: Score) -> Outcome {
        let won = self.layout.as_ref().is_some_and(|l| l.letters() == guess);
        self.keys.apply(guess, &score);
        if let Some(row) = self.rows.get_mut(self.row) {
            row.set_score(score);
        }

        if won {
            self.phase = Phase::Won;
            return Outcome::Won;
        }

        self.row += 1;
        self.col = 0;
        if self.row >= MAX_GUESSES {
            self.phase = Phase::Lost;
            Outcome::Lost
        } else {
            Outcome::Advance { next_row: self.row }
        }
    }

    pub(crate) fn reset_restart_count(&mut self) {
        self.restart_count = 0;
    }

    pub(crate) fn count_restart(&mut self) -> u32 {
        self.restart_count += 1;
        self.restart_count
    }

    pub(crate) fn lock_input(&mut self) {
        self.input_locked = true;
    }

    pub(crate) fn unlock_input(&mut self) {
        self.input_locked = false;
    }

    pub(crate) fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
        });
    }

    pub(crate) fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use proptest::prelude::*;

    fn started(phrase: &str) -> Session {
        let mut session = Session::new();
        let layout = TargetLayout::parse(phrase).unwrap();
        session.begin("Mia", 0, "test".to_string(), layout);
        session
    }

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_game_over());
        assert_eq!(session.controls(), Controls::default());
        assert_eq!(session.current_guess(), None);
    }

    #[test]
    fn add_letter_stops_at_row_end() {
        let mut session = started("CRANE");
        type_word(&mut session, "slatex");
        assert_eq!(session.current_guess().as_deref(), Some("SLATE"));
        assert_eq!(session.current_col(), 5);
        assert!(!session.add_letter('Q'));
    }

    #[test]
    fn add_letter_rejects_non_letters() {
        let mut session = started("CRANE");
        assert!(!session.add_letter('1'));
        assert!(!session.add_letter(' '));
        assert_eq!(session.current_col(), 0);
    }

    #[test]
    fn cursor_skips_space_slots() {
        let mut session = started("AB CD");
        type_word(&mut session, "AB");
        assert_eq!(session.current_col(), 2); // on the space
        assert!(session.add_letter('C'));
        assert_eq!(session.current_col(), 4);

        assert!(session.delete_letter());
        assert_eq!(session.current_col(), 3);
        assert!(session.delete_letter());
        assert_eq!(session.current_col(), 1);
        assert_eq!(session.rows()[0].cells(), &[Some('A'), None, None, None]);
    }

    #[test]
    fn fill_then_clear_round_trip_with_spaces() {
        let mut session = started("GAVIN AND STACEY");
        let letters = session.layout().unwrap().letter_count();

        type_word(&mut session, "GAVINANDSTACEY");
        assert!(session.rows()[0].is_complete());
        assert_eq!(session.current_col(), 16);

        for _ in 0..letters {
            assert!(session.delete_letter());
        }
        assert!(session.rows()[0].is_empty());
        assert_eq!(session.current_col(), 0);
        assert!(!session.delete_letter());
    }

    #[test]
    fn locked_input_is_ignored() {
        let mut session = started("CRANE");
        session.lock_input();
        assert!(!session.add_letter('A'));
        session.unlock_input();
        assert!(session.add_letter('A'));
        session.lock_input();
        assert!(!session.delete_letter());
        assert_eq!(session.current_col(), 1);
    }

    #[test]
    fn apply_guess_advances_then_loses() {
        let mut session = started("CRANE");
        for row in 0..MAX_GUESSES {
            session.fill_row("SLATE");
            let score = Score::calculate("SLATE", "CRANE");
            let outcome = session.apply_guess("SLATE", score);
            if row + 1 < MAX_GUESSES {
                assert_eq!(outcome, Outcome::Advance { next_row: row + 1 });
            } else {
                assert_eq!(outcome, Outcome::Lost);
            }
        }
        assert_eq!(session.phase(), Phase::Lost);
        assert!(session.is_game_over());
        assert_eq!(session.key_states().get('A'), Some(Feedback::Correct));
        assert_eq!(session.key_states().get('S'), Some(Feedback::Absent));
        assert!(session.controls().restart);
        assert!(!session.controls().reveal);
    }

    #[test]
    fn apply_guess_wins() {
        let mut session = started("LEMON TART");
        session.fill_row("LEMONTART");
        let layout = session.layout().unwrap().clone();
        let score = Score::for_layout("LEMONTART", &layout);
        assert_eq!(session.apply_guess("LEMONTART", score), Outcome::Won);
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.current_row(), 0);

        let controls = session.controls();
        assert!(controls.continue_level && controls.reveal && !controls.restart);
    }

    #[test]
    fn controls_hidden_while_locked() {
        let mut session = started("CRANE");
        session.fill_row("CRANE");
        session.apply_guess("CRANE", Score::calculate("CRANE", "CRANE"));
        session.lock_input();
        assert_eq!(session.controls(), Controls::default());
    }

    #[test]
    fn no_more_levels_is_game_over() {
        let mut session = Session::new();
        session.no_more_levels("Mia", 9);
        assert_eq!(session.phase(), Phase::NoMoreLevels);
        assert!(session.is_game_over());
        assert_eq!(session.message().map(|m| m.text.as_str()), Some("No more levels."));
        assert!(!session.add_letter('A'));
        assert_eq!(session.controls(), Controls::default());
    }

    proptest! {
        #[test]
        fn add_then_delete_restores_empty_row(
            phrase in "[A-Z]{1,6}( [A-Z]{1,6}){0,3}",
            letters in "[a-z]{24}",
        ) {
            let mut session = started(&phrase);
            let count = session.layout().unwrap().letter_count();

            for ch in letters.chars().take(count) {
                prop_assert!(session.add_letter(ch));
            }
            prop_assert!(session.rows()[0].is_complete());

            for _ in 0..count {
                prop_assert!(session.delete_letter());
            }
            prop_assert!(session.rows()[0].is_empty());
            prop_assert_eq!(session.current_col(), 0);
        }
    }
}
