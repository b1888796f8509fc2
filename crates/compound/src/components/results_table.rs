use super::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;
use crate::util::format::format_value;
use crate::util::styles::{FINAL_ROW_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};
use compound_core::Series;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};

/// Year/value table with the final year highlighted.
pub struct ResultsTable {
    /// Rows visible in the last render, used as the page size
    page_size: usize,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self { page_size: 10 }
    }

    /// Rows for the visible window starting at `offset`.
    pub fn rows(series: &Series, offset: usize, limit: usize) -> Vec<Row<'static>> {
        let final_year = series.last().map(|p| p.year);

        series
            .iter()
            .skip(offset)
            .take(limit)
            .map(|point| {
                let row = Row::new(vec![
                    Cell::from(point.year.to_string()),
                    Cell::from(Line::from(format_value(point.value)).alignment(Alignment::Right)),
                ]);
                if Some(point.year) == final_year {
                    row.style(
                        Style::default()
                            .bg(FINAL_ROW_COLOR)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    row
                }
            })
            .collect()
    }
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsTable {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let page = self.page_size.max(1) as isize;
        let delta = match key.code {
            KeyCode::PageDown => page,
            KeyCode::PageUp => -page,
            KeyCode::Char(']') => 1,
            KeyCode::Char('[') => -1,
            _ => return EventResult::NotHandled,
        };
        state.scroll_table(delta, self.page_size);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" RESULTS ", false);

        let Some(series) = state.series() else {
            let paragraph = Paragraph::new(Line::from("No results to display"))
                .style(Style::default().fg(HELP_COLOR))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        // Borders and header row
        let visible = area.height.saturating_sub(3) as usize;
        self.page_size = visible;
        let offset = state
            .table_scroll
            .min(series.len().saturating_sub(visible));

        let header = Row::new(vec![
            Cell::from("Year"),
            Cell::from(Line::from("Value").alignment(Alignment::Right)),
        ])
        .style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            Self::rows(series, offset, visible),
            [Constraint::Length(6), Constraint::Min(12)],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }
}
