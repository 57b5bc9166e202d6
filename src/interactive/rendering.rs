//! TUI rendering with ratatui
//!
//! Board, keyboard, level panels and the message line.

use super::app::App;
use crate::core::{Feedback, MAX_GUESSES};
use crate::session::{MessageStyle, Phase, WordOracle};
use crate::store::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board and levels
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let play_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(MAX_GUESSES).unwrap_or(6) + 2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    render_board(f, app, now, play_chunks[0]);
    render_keyboard(f, app, play_chunks[1]);
    render_levels(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn tile_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let session = app.game.session();
    let title = match (session.player(), session.layout()) {
        (Some(player), Some(_)) => format!(
            "WORDLE LEVELS - {player} - level {}/{}",
            session.level_index() + 1,
            app.game.catalog().level_count(player)
        ),
        _ => "WORDLE LEVELS".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, now: Instant, area: Rect) {
    let session = app.game.session();
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(layout) = session.layout() else {
        let text = match session.phase() {
            Phase::NoMoreLevels => "All done here. Pick a level on the right.",
            _ => "Pick a level on the right.",
        };
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    };

    // The row under animation only shows colors for tiles already flipped
    let flipping = app
        .animation()
        .map(|a| (a.reveal.row, a.flipped(now)));

    let lines: Vec<Line> = session
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let visible = match flipping {
                Some((r, flipped)) if r == row_index => flipped,
                _ => usize::MAX,
            };
            let is_cursor_row = row_index == session.current_row() && session.phase() == Phase::InProgress;

            let spans: Vec<Span> = (0..layout.slots().len())
                .map(|slot| match layout.letter_index(slot) {
                    Some(i) => {
                        let letter = row.cells().get(i).copied().flatten();
                        let feedback = row
                            .score()
                            .and_then(|s| s.as_slice().get(i).copied())
                            .filter(|_| i < visible);
                        let text = match letter {
                            Some(c) => format!(" {c} "),
                            None if is_cursor_row => " _ ".to_string(),
                            None => " · ".to_string(),
                        };
                        Span::styled(text, tile_style(feedback))
                    }
                    None => Span::raw("   "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_keyboard<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let keys = app.game.session().key_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(format!(" {c} "), tile_style(keys.get(c))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_levels<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let players = app.players();
    if players.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = players
        .iter()
        .map(|_| Constraint::Ratio(1, u32::try_from(players.len()).unwrap_or(1)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, player) in players.iter().enumerate() {
        let focused = app.focused_player() == Some(player.as_str());
        let statuses = app.game.level_statuses(player);
        let done = statuses.iter().filter(|s| s.completed).count();

        let lines: Vec<Line> = statuses
            .iter()
            .enumerate()
            .map(|(n, status)| {
                let (mark, color) = if status.active {
                    ("▶", Color::Yellow)
                } else if status.completed {
                    ("✓", Color::Green)
                } else {
                    ("·", Color::DarkGray)
                };
                let mut style = Style::default().fg(color);
                if focused && n == app.selected_level() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(
                    format!(" {mark} {}. {}", n + 1, status.id),
                    style,
                ))
            })
            .collect();

        let border = if focused { Color::Yellow } else { Color::Gray };
        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {player} {done}/{} ", statuses.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        );
        f.render_widget(panel, chunks[i]);
    }
}

fn render_message<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let session = app.game.session();
    let mut spans = Vec::new();

    if let Some(message) = session.message() {
        let style = match message.style {
            MessageStyle::Info => Style::default().fg(Color::Cyan),
            MessageStyle::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            MessageStyle::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(message.text.clone(), style));
    }

    let controls = session.controls();
    let offered: Vec<&str> = [
        (controls.restart, "Ctrl+R restart"),
        (controls.reveal, "Ctrl+W reveal"),
        (controls.continue_level, "Ctrl+N continue"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, label)| *label)
    .collect();
    if !offered.is_empty() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            offered.join(" | "),
            Style::default().fg(Color::Yellow),
        ));
    }

    let message = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double));
    f.render_widget(message, area);
}

fn render_help<S: Store, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let help_text = if app.game.session().input_locked() {
        "Revealing..."
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Tab: Player | Up/Down + Ctrl+O or 1-9: Level | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
