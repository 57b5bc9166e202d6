//! Display functions for command results

use super::formatters::{create_progress_bar, emoji_row, scored_row, tile};
use crate::core::{Feedback, KeyStates, Score, TargetLayout};
use crate::session::{LevelStatus, Message, MessageStyle, Session};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print the feedback for one guess against a target
pub fn print_score_result(guess: &str, score: &Score, layout: &TargetLayout) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Target: {}", layout.phrase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", scored_row(guess, score, layout));
    println!("  {}", emoji_row(score, layout));

    println!();
    if score.is_perfect() {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        println!(
            "{} correct, {} present, {} absent",
            score.count(Feedback::Correct).to_string().green(),
            score.count(Feedback::Present).to_string().yellow(),
            score.count(Feedback::Absent).to_string().bright_black()
        );
    }
}

/// Print every row of the board that has been typed into
pub fn print_board(session: &Session) {
    let Some(layout) = session.layout() else {
        return;
    };

    println!();
    for row in session.rows() {
        if row.is_empty() && row.score().is_none() {
            continue;
        }
        let mut line = String::new();
        for slot in 0..layout.slots().len() {
            match layout.letter_index(slot) {
                Some(i) => {
                    let letter = row.cells().get(i).copied().flatten().unwrap_or('_');
                    let feedback = row.score().and_then(|s| s.as_slice().get(i).copied());
                    line.push_str(&tile(letter, feedback).to_string());
                }
                None => line.push_str("   "),
            }
        }
        println!("  {line}");
    }
}

/// Print the keyboard with each letter colored by its best state
pub fn print_keyboard(keys: &KeyStates) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| tile(c, keys.get(c)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
}

pub fn print_message(message: &Message) {
    let text = match message.style {
        MessageStyle::Info => message.text.bright_cyan(),
        MessageStyle::Success => message.text.bright_green().bold(),
        MessageStyle::Error => message.text.red().bold(),
    };
    println!("\n  {text}");
}

/// Print one player's completion summary
pub fn print_progress(player: &str, statuses: &[LevelStatus]) {
    let done = statuses.iter().filter(|s| s.completed).count();
    println!(
        "\n{} {} {}/{}",
        format!("{player:<12}").bright_cyan().bold(),
        create_progress_bar(done, statuses.len(), 20).green(),
        done,
        statuses.len()
    );
    for status in statuses {
        let mark = if status.completed {
            "✓".green()
        } else {
            "·".bright_black()
        };
        println!("    {mark} {}", status.id);
    }
}

/// Print a freshly created custom game
pub fn print_share(game_id: &str, link: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CUSTOM GAME CREATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  Game id: {}", game_id.bright_yellow().bold());
    println!("  Link:    {}", link.underline());
    println!(
        "\n  {}",
        "Links only open on the device that created the game.".bright_black()
    );
}
