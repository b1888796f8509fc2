//! Screen layout shared by the native and web front ends.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::styles::FOCUS_COLOR;

pub const TITLE: &str = "Compound Growth/Decay Calculator";

/// Width of the parameter form column
const FORM_WIDTH: u16 = 38;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub table: Rect,
    pub chart: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        Self {
            header: rows[0],
            form: columns[0],
            table: results[0],
            chart: results[1],
            status: rows[2],
        }
    }
}

/// Title line showing the active mode.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = state.form.direction.mode_label();
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("[{}]", mode), Style::default().fg(FOCUS_COLOR)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::split(area);

        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.status.height, 2);
        assert_eq!(layout.form.width, FORM_WIDTH);
        assert_eq!(layout.table.width, 120 - FORM_WIDTH);
        assert_eq!(layout.table.height + layout.chart.height, 36);
        assert_eq!(layout.chart.y, layout.table.y + layout.table.height);
    }
}
