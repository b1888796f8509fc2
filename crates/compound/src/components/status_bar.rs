use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::HELP_COLOR;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "Tab/↑↓: field | ←→/Space: change option | PgUp/PgDn: scroll table | s: export CSV | q: quit";

/// Shown whenever the form cannot produce a series.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid positive numbers for initial value and years.";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// The line to display, by priority: invalid input, then the last status
    /// message, then key help.
    pub fn content(state: &AppState) -> Line<'static> {
        if let Some(error) = state.input_error() {
            return Line::from(vec![
                Span::styled(INVALID_INPUT_MESSAGE, Style::default().fg(Color::Red)),
                Span::raw(" "),
                Span::styled(format!("({})", error), Style::default().fg(HELP_COLOR)),
            ]);
        }

        match &state.status {
            Some(status) if status.is_error => Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(status.text.clone()),
            ]),
            Some(status) => Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR))),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::content(state)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_by_default() {
        let state = AppState::default();
        assert_eq!(line_text(&StatusBar::content(&state)), HELP_TEXT);
    }

    #[test]
    fn test_invalid_input_takes_priority() {
        let mut state = AppState::default();
        state.set_info("Exported");
        state.form.initial_value.value = "0".to_string();
        state.recompute();

        let text = line_text(&StatusBar::content(&state));
        assert!(text.starts_with(INVALID_INPUT_MESSAGE));
        assert!(text.contains("initial value must be positive"));
    }

    #[test]
    fn test_status_message_shown() {
        let mut state = AppState::default();
        state.set_error("disk full");
        assert_eq!(line_text(&StatusBar::content(&state)), "Error: disk full");
    }
}
