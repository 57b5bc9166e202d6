//! Formatting utilities for terminal output

use crate::core::{Feedback, Score, TargetLayout};
use colored::{ColoredString, Colorize};

/// Color a single board tile
#[must_use]
pub fn tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// Render a scored guess as colored tiles, with gaps where the target has
/// spaces
#[must_use]
pub fn scored_row(guess: &str, score: &Score, layout: &TargetLayout) -> String {
    let letters: Vec<char> = guess.chars().collect();
    let mut out = String::new();
    for slot in 0..layout.slots().len() {
        match layout.letter_index(slot) {
            Some(i) => {
                let letter = letters.get(i).copied().unwrap_or(' ');
                let feedback = score.as_slice().get(i).copied();
                out.push_str(&tile(letter, feedback).to_string());
            }
            None => out.push_str("   "),
        }
    }
    out
}

/// Emoji line for a score, with a gap between words
#[must_use]
pub fn emoji_row(score: &Score, layout: &TargetLayout) -> String {
    let mut out = String::new();
    for slot in 0..layout.slots().len() {
        match layout.letter_index(slot) {
            Some(i) => {
                if let Some(feedback) = score.as_slice().get(i) {
                    out.push(feedback.emoji());
                }
            }
            None => out.push(' '),
        }
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (done * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_row_all_absent() {
        let layout = TargetLayout::parse("CRANE").unwrap();
        let score = Score::calculate("QQQQQ", "CRANE");
        assert_eq!(emoji_row(&score, &layout), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_row_keeps_word_gaps() {
        let layout = TargetLayout::parse("LEMON TART").unwrap();
        let score = Score::for_layout("LEMONTART", &layout);
        assert_eq!(emoji_row(&score, &layout), "🟩🟩🟩🟩🟩 🟩🟩🟩🟩");
    }

    #[test]
    fn scored_row_contains_letters() {
        colored::control::set_override(false);
        let layout = TargetLayout::parse("AB CD").unwrap();
        let score = Score::for_layout("ABCD", &layout);
        assert_eq!(scored_row("ABCD", &score, &layout), " A  B     C  D ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 4, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(4, 4, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(2, 4, 8), "████░░░░");
    }

    #[test]
    fn progress_bar_no_levels() {
        assert_eq!(create_progress_bar(0, 0, 4), "░░░░");
    }
}
