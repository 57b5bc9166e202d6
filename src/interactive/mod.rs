//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Command, TerminalGuard, map_key, run_tui};
