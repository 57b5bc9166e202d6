//! Terminal output formatting
//!
//! Display utilities for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_keyboard, print_message, print_progress, print_score_result, print_share,
};
