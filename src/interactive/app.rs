//! TUI application state and logic

use crate::levels::CUSTOM_PLAYER;
use crate::session::{Game, Reveal, Submission, WordOracle};
use crate::store::Store;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const IDLE_POLL: Duration = Duration::from_millis(250);
const FRAME: Duration = Duration::from_millis(30);

/// Player intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Delete,
    Submit,
    Restart,
    Reveal,
    Continue,
    NextPlayer,
    PrevPlayer,
    SelectUp,
    SelectDown,
    OpenSelected,
    /// Open level `n` (0-based) of the focused player
    OpenLevel(usize),
    Quit,
}

/// Map a key event to a command
///
/// Letters always type, so the level controls sit on Ctrl chords.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('r') if ctrl => Some(Command::Restart),
        KeyCode::Char('w') if ctrl => Some(Command::Reveal),
        KeyCode::Char('n') if ctrl => Some(Command::Continue),
        KeyCode::Char('o') if ctrl => Some(Command::OpenSelected),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Command::Letter(c.to_ascii_uppercase())),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(|d| Command::OpenLevel(d - 1)),
        KeyCode::Backspace => Some(Command::Delete),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Tab => Some(Command::NextPlayer),
        KeyCode::BackTab => Some(Command::PrevPlayer),
        KeyCode::Up => Some(Command::SelectUp),
        KeyCode::Down => Some(Command::SelectDown),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// A row being flipped tile by tile
#[derive(Debug, Clone)]
pub struct Animation {
    pub reveal: Reveal,
    started: Instant,
    per_letter: Duration,
}

impl Animation {
    /// Tiles of the row already showing their color at `now`
    #[must_use]
    pub fn flipped(&self, now: Instant) -> usize {
        let letters = self.reveal.score.len();
        if self.per_letter.is_zero() {
            return letters;
        }
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        let steps = usize::try_from(elapsed / self.per_letter.as_millis()).unwrap_or(usize::MAX);
        steps.saturating_add(1).min(letters)
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.reveal
            .lock
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    fn is_done(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

/// Application state
pub struct App<S: Store, O: WordOracle> {
    pub game: Game<S, O>,
    players: Vec<String>,
    focused: usize,
    selected: usize,
    animation: Option<Animation>,
    pub should_quit: bool,
}

impl<S: Store, O: WordOracle> App<S, O> {
    /// Wrap `game` without starting anything
    ///
    /// Used when the game already has a session (or a message) to show.
    #[must_use]
    pub fn new(game: Game<S, O>) -> Self {
        let players = game
            .catalog()
            .players()
            .filter(|p| *p != CUSTOM_PLAYER)
            .map(str::to_string)
            .collect();

        let mut app = Self {
            game,
            players,
            focused: 0,
            selected: 0,
            animation: None,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// Start `player` (or the first player) at their first open level
    #[must_use]
    pub fn start(mut self, player: Option<&str>) -> Self {
        let Some(player) = player
            .map(str::to_string)
            .or_else(|| self.players.first().cloned())
        else {
            return self;
        };

        let first_open = self
            .game
            .catalog()
            .levels(&player)
            .map_or(0, |levels| self.game.progress(&player).first_open(levels));
        self.game.start_level(&player, first_open, true);
        self.sync_selection();
        self
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn focused_player(&self) -> Option<&str> {
        self.players.get(self.focused).map(String::as_str)
    }

    #[must_use]
    pub const fn selected_level(&self) -> usize {
        self.selected
    }

    pub const fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Letter(c) => {
                self.game.add_letter(c);
            }
            Command::Delete => {
                self.game.delete_letter();
            }
            Command::Submit => {
                if let Submission::Revealed(reveal) = self.game.submit_guess() {
                    self.animation = Some(Animation {
                        reveal,
                        started: now,
                        per_letter: self.game.timing().per_letter,
                    });
                    self.tick(now);
                }
            }
            Command::Restart => {
                self.game.restart_level();
            }
            Command::Reveal => {
                self.game.reveal_word();
            }
            Command::Continue => {
                if self.game.continue_level() {
                    self.sync_selection();
                }
            }
            Command::NextPlayer => self.cycle_player(true),
            Command::PrevPlayer => self.cycle_player(false),
            Command::SelectUp => self.selected = self.selected.saturating_sub(1),
            Command::SelectDown => {
                if self.selected + 1 < self.focused_level_count() {
                    self.selected += 1;
                }
            }
            Command::OpenSelected => self.open_selected(),
            Command::OpenLevel(index) => {
                if index < self.focused_level_count() {
                    self.selected = index;
                    self.open_selected();
                }
            }
        }
    }

    /// Finish the reveal animation once its lock has elapsed
    ///
    /// Returns `true` if the animation ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.animation.as_ref().is_some_and(|a| a.is_done(now)) {
            return false;
        }
        self.animation = None;
        self.game.finish_reveal();
        true
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.animation
            .as_ref()
            .map_or(IDLE_POLL, |a| a.remaining(now).min(FRAME))
    }

    fn open_selected(&mut self) {
        if self.animation.is_some() {
            return;
        }
        let Some(player) = self.focused_player().map(str::to_string) else {
            return;
        };
        debug!(player = %player, index = self.selected, "level selected");
        self.game.start_level(&player, self.selected, true);
    }

    fn cycle_player(&mut self, forward: bool) {
        let count = self.players.len();
        if count == 0 {
            return;
        }
        self.focused = if forward {
            (self.focused + 1) % count
        } else {
            (self.focused + count - 1) % count
        };
        self.selected = 0;
    }

    fn focused_level_count(&self) -> usize {
        self.focused_player()
            .map_or(0, |p| self.game.catalog().level_count(p))
    }

    /// Point the level panel at the level being played
    fn sync_selection(&mut self) {
        let session = self.game.session();
        let Some(index) = session
            .player()
            .and_then(|p| self.players.iter().position(|name| name == p))
        else {
            return;
        };
        self.focused = index;
        self.selected = session
            .level_index()
            .min(self.focused_level_count().saturating_sub(1));
    }
}

/// Raw mode plus alternate screen, undone on drop
pub struct TerminalGuard;

impl TerminalGuard {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be enabled.
    pub fn enter() -> io::Result<Self> {
        // Built first so a failure below still restores the terminal
        let guard = Self;
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store, O: WordOracle>(mut app: App<S, O>) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &mut app);
    drop(guard);
    result
}

fn run_app<B: ratatui::backend::Backend, S: Store, O: WordOracle>(
    terminal: &mut Terminal<B>,
    app: &mut App<S, O>,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, app, now))?;

        if event::poll(app.poll_timeout(now))?
            && let Event::Key(key) = event::read()?
            && let Some(command) = map_key(key)
        {
            app.apply(command, Instant::now());
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::builtin_catalog;
    use crate::session::{Outcome, Phase, RevealTiming};
    use crate::store::MemoryStore;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App<MemoryStore, crate::session::AcceptAll> {
        App::new(Game::new(builtin_catalog(), MemoryStore::new())).start(None)
    }

    fn type_word(app: &mut App<MemoryStore, crate::session::AcceptAll>, word: &str, now: Instant) {
        for c in word.chars() {
            app.apply(Command::Letter(c), now);
        }
    }

    #[test]
    fn letters_type_and_chords_control() {
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(Command::Letter('A')));
        assert_eq!(map_key(press(KeyCode::Char('Z'))), Some(Command::Letter('Z')));
        assert_eq!(map_key(ctrl('r')), Some(Command::Restart));
        assert_eq!(map_key(ctrl('w')), Some(Command::Reveal));
        assert_eq!(map_key(ctrl('n')), Some(Command::Continue));
        assert_eq!(map_key(ctrl('c')), Some(Command::Quit));
        assert_eq!(map_key(ctrl('x')), None);
    }

    #[test]
    fn editing_and_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Command::Submit));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Command::Delete));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(Command::NextPlayer));
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(Command::OpenLevel(0)));
        assert_eq!(map_key(press(KeyCode::Char('9'))), Some(Command::OpenLevel(8)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
        assert_eq!(map_key(press(KeyCode::Char('!'))), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn starts_first_player_at_first_open_level() {
        let store = MemoryStore::from_json(r#"{"progress": {"Mia": {"completed": ["mia-01"]}}}"#);
        let app = App::new(Game::new(builtin_catalog(), store)).start(None);
        assert_eq!(app.game.session().level_id(), Some("mia-02"));
        assert_eq!(app.focused_player(), Some("Mia"));
        assert_eq!(app.selected_level(), 1);
    }

    #[test]
    fn reveal_locks_until_animation_ends() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "PLANE", start);
        app.apply(Command::Submit, start);

        let animation = app.animation().unwrap();
        assert_eq!(animation.reveal.outcome, Outcome::Advance { next_row: 1 });
        assert_eq!(animation.flipped(start), 1);
        assert_eq!(animation.flipped(start + Duration::from_millis(650)), 3);
        assert!(app.game.session().input_locked());
        assert_eq!(app.poll_timeout(start), FRAME);

        // typing during the reveal is dropped
        app.apply(Command::Letter('A'), start + Duration::from_millis(100));
        assert!(app.game.session().rows()[1].is_empty());

        assert!(!app.tick(start + Duration::from_millis(1000)));
        assert!(app.tick(start + Duration::from_millis(1550)));
        assert!(app.animation().is_none());
        assert!(!app.game.session().input_locked());
        assert_eq!(app.poll_timeout(start), IDLE_POLL);
    }

    #[test]
    fn instant_timing_finishes_immediately() {
        let game = Game::new(builtin_catalog(), MemoryStore::new()).with_timing(RevealTiming::instant());
        let mut app = App::new(game).start(Some("Hannah"));
        let now = Instant::now();
        type_word(&mut app, "GRAPE", now);
        app.apply(Command::Submit, now);

        assert!(app.animation().is_none());
        assert_eq!(app.game.session().phase(), Phase::Won);
        assert!(app.game.session().controls().continue_level);

        app.apply(Command::Continue, now);
        assert_eq!(app.game.session().level_id(), Some("hannah-02"));
        assert_eq!(app.selected_level(), 1);
    }

    #[test]
    fn panel_navigation_opens_levels() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Command::NextPlayer, now);
        assert_eq!(app.focused_player(), Some("Hannah"));
        app.apply(Command::SelectDown, now);
        app.apply(Command::SelectDown, now);
        app.apply(Command::OpenSelected, now);
        assert_eq!(app.game.session().level_id(), Some("hannah-03"));

        app.apply(Command::PrevPlayer, now);
        assert_eq!(app.focused_player(), Some("Mia"));
        app.apply(Command::OpenLevel(3), now);
        assert_eq!(app.game.session().level_id(), Some("mia-04"));

        // out of range numbers do nothing
        app.apply(Command::OpenLevel(8), now);
        assert_eq!(app.game.session().level_id(), Some("mia-04"));
    }

    #[test]
    fn quit() {
        let mut app = app();
        app.apply(Command::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
