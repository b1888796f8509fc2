//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Border color of the focused panel
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color for table headers and field labels
pub const HEADER_COLOR: Color = Color::Cyan;

/// Line color of the series chart
pub const SERIES_COLOR: Color = Color::Rgb(75, 192, 192);

/// Background of the final-year row in the results table
pub const FINAL_ROW_COLOR: Color = Color::Rgb(25, 60, 110);

pub const POSITIVE_COLOR: Color = Color::Green;

pub const NEGATIVE_COLOR: Color = Color::Red;

/// Create a bordered block whose border is highlighted when focused.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Color for a change relative to the principal (green for gains, red for losses).
pub fn change_color(ratio: f64) -> Color {
    if ratio >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}
