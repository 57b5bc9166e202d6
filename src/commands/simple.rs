//! Simple line-based mode
//!
//! Plays the same levels as the TUI, one typed line at a time. Reveals are
//! instant.

use crate::output::{print_board, print_keyboard, print_message};
use crate::session::{Game, Phase, RESTARTS_BEFORE_SKIP, Submission, WordOracle};
use crate::Result;
use crate::store::Store;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    Restart,
    Reveal,
    Continue,
    /// Jump to a level by 1-based number
    Level(usize),
    Levels,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line typed at the prompt
///
/// Anything made only of letters and spaces is a guess; spaces are dropped
/// since the board fills them in. `guess_letters` is the letter count of the
/// level in progress: input with exactly that many letters is always a guess,
/// so a target such as REVEAL stays guessable. A leading `:` forces a command.
#[must_use]
pub fn parse_line(input: &str, guess_letters: Option<usize>) -> LineCommand {
    let input = input.trim();

    if let Some(command) = input.strip_prefix(':') {
        return parse_command(command.trim())
            .unwrap_or_else(|| LineCommand::Unknown(input.to_string()));
    }

    let is_letters = !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
    let guess = || {
        input
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect::<String>()
    };

    if is_letters && guess_letters.is_some_and(|n| guess().len() == n) {
        return LineCommand::Guess(guess());
    }
    if let Some(command) = parse_command(input) {
        return command;
    }
    if is_letters {
        return LineCommand::Guess(guess());
    }

    LineCommand::Unknown(input.to_string())
}

fn parse_command(input: &str) -> Option<LineCommand> {
    let lower = input.to_ascii_lowercase();
    let command = match lower.as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "restart" | "r" => LineCommand::Restart,
        "reveal" => LineCommand::Reveal,
        "continue" | "next" | "c" => LineCommand::Continue,
        "levels" | "l" => LineCommand::Levels,
        "help" | "h" | "?" => LineCommand::Help,
        _ => {
            let number = lower.strip_prefix("level ")?;
            match number.trim().parse::<usize>() {
                Ok(n) if n > 0 => LineCommand::Level(n),
                _ => LineCommand::Unknown(input.to_string()),
            }
        }
    };
    Some(command)
}

/// Run the line-based game for `player`, or ask which player to use
///
/// # Errors
///
/// Returns an error on an I/O failure reading input.
pub fn run_simple<S: Store, O: WordOracle>(game: &mut Game<S, O>, player: Option<&str>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Levels - Simple                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let player = match player {
        Some(player) => player.to_string(),
        None => match choose_player(game)? {
            Some(player) => player,
            None => return Ok(()),
        },
    };

    let first_open = game
        .catalog()
        .levels(&player)
        .map_or(0, |levels| game.progress(&player).first_open(levels));
    game.start_level(&player, first_open, true);
    print_help();
    show_level(game);

    loop {
        let Some(line) = get_user_input("Guess or command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let session = game.session();
        let guess_letters = session
            .layout()
            .filter(|_| session.phase() == Phase::InProgress)
            .map(|layout| layout.letter_count());

        match parse_line(&line, guess_letters) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Guess(guess) => submit(game, &guess),
            LineCommand::Restart => {
                if game.restart_level() {
                    show_level(game);
                } else {
                    println!("Restart is only available after running out of guesses.");
                }
            }
            LineCommand::Reveal => {
                if game.reveal_word().is_some() {
                    show_message(game);
                } else {
                    println!("Reveal unlocks after a win or {RESTARTS_BEFORE_SKIP} restarts.");
                }
            }
            LineCommand::Continue => {
                if game.continue_level() {
                    show_level(game);
                } else {
                    println!("Continue unlocks after a win or {RESTARTS_BEFORE_SKIP} restarts.");
                }
            }
            LineCommand::Level(number) => {
                game.start_level(&player, number - 1, true);
                show_level(game);
            }
            LineCommand::Levels => show_levels(game, &player),
            LineCommand::Help => print_help(),
            LineCommand::Unknown(input) => println!("❌ Not understood: {input} (type 'help')"),
        }
    }
}

fn submit<S: Store, O: WordOracle>(game: &mut Game<S, O>, guess: &str) {
    let Some(expected) = game.session().layout().map(|l| l.letter_count()) else {
        show_message(game);
        return;
    };
    if game.session().phase() != Phase::InProgress {
        println!("This level is over. Try 'restart', 'reveal' or 'continue'.");
        return;
    }
    if guess.len() != expected {
        println!("❌ Guess must have {expected} letters");
        return;
    }

    while game.delete_letter() {}
    for ch in guess.chars() {
        game.add_letter(ch);
    }

    match game.submit_guess() {
        Submission::Revealed(_) => {
            game.finish_reveal();
            print_board(game.session());
            print_keyboard(game.session().key_states());
            show_message(game);
            show_controls(game);
        }
        Submission::Rejected { .. } => show_message(game),
        Submission::Ignored => println!("Nothing to submit."),
    }
}

fn show_level<S: Store, O: WordOracle>(game: &Game<S, O>) {
    let session = game.session();
    let Some(player) = session.player() else {
        return;
    };
    let Some(layout) = session.layout() else {
        show_message(game);
        return;
    };

    let pattern: String = layout
        .slots()
        .iter()
        .map(|slot| if slot.is_space() { "   " } else { " _ " })
        .collect();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} level {}/{}  ({} letters)",
        player.bright_cyan().bold(),
        session.level_index() + 1,
        game.catalog().level_count(player),
        layout.letter_count()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n  {pattern}");

    if session.rows().iter().any(|r| r.score().is_some()) {
        print_board(session);
        print_keyboard(session.key_states());
    }
    show_message(game);
    show_controls(game);
}

fn show_message<S: Store, O: WordOracle>(game: &Game<S, O>) {
    if let Some(message) = game.session().message() {
        print_message(message);
    }
}

fn show_controls<S: Store, O: WordOracle>(game: &Game<S, O>) {
    let controls = game.session().controls();
    let mut offered = Vec::new();
    if controls.restart {
        offered.push("restart");
    }
    if controls.reveal {
        offered.push("reveal");
    }
    if controls.continue_level {
        offered.push("continue");
    }
    if !offered.is_empty() {
        println!("\n  Available: {}", offered.join(", ").bright_yellow());
    }
}

fn show_levels<S: Store, O: WordOracle>(game: &Game<S, O>, player: &str) {
    for (i, status) in game.level_statuses(player).iter().enumerate() {
        let mark = if status.active {
            "▶".bright_yellow()
        } else if status.completed {
            "✓".green()
        } else {
            "·".bright_black()
        };
        println!("  {mark} {:>2}. {}", i + 1, status.id);
    }
}

fn choose_player<S: Store, O: WordOracle>(game: &Game<S, O>) -> Result<Option<String>> {
    let players: Vec<String> = game.catalog().players().map(str::to_string).collect();
    if players.is_empty() {
        println!("No players in the level catalog.");
        return Ok(None);
    }

    println!("Players:");
    for (i, name) in players.iter().enumerate() {
        let progress = game.progress(name);
        println!(
            "  {}. {} ({}/{} done)",
            i + 1,
            name.bright_white().bold(),
            progress.completed_count(),
            game.catalog().level_count(name)
        );
    }

    loop {
        let Some(input) = get_user_input("Player (number or name)")? else {
            return Ok(None);
        };
        let by_number = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| players.get(i));
        let by_name = players.iter().find(|p| p.eq_ignore_ascii_case(&input));
        if let Some(player) = by_number.or(by_name) {
            return Ok(Some(player.clone()));
        }
        println!("❌ No such player");
    }
}

fn print_help() {
    println!("Type a guess to submit it. Spaces are optional in phrases.");
    println!("Commands: restart, reveal, continue, level <n>, levels, help, quit");
    println!("Prefix a command with ':' (e.g. :reveal) if it has as many letters as the word.\n");
}

/// Read a trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
