//! Parameter form: three numeric text fields, the compounding selector and the
//! growth/decay toggle.

use super::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, FormField, FormState, TextField, is_numeric_char};
use crate::util::format::{format_change, format_value};
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, change_color, focused_block};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct FormPanel;

impl FormPanel {
    pub fn new() -> Self {
        Self
    }

    fn field_lines(form: &FormState) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for field in FormField::ALL {
            let focused = form.focused == field;
            let label_style = if focused {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_COLOR)
            };
            lines.push(Line::from(Span::styled(field.label(), label_style)));

            let value = match form.text_field(field) {
                Some(text) => render_text_field(text, focused),
                None => Self::selector_line(form, field, focused),
            };
            lines.push(value);
            lines.push(Line::from(""));
        }

        lines
    }

    fn selector_line(form: &FormState, field: FormField, focused: bool) -> Line<'static> {
        let text = match field {
            FormField::Frequency => {
                format!("< {} ({}/yr) >", form.frequency.label(), form.frequency.periods_per_year())
            }
            _ => format!("< {} >", form.direction.mode_label()),
        };

        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Line::from(vec![Span::raw("  "), Span::styled(text, style)])
    }

    fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
        let Ok(computation) = &state.computation else {
            return vec![Line::from(Span::styled(
                "No results for the current input",
                Style::default().fg(HELP_COLOR),
            ))];
        };

        let params = &computation.parameters;
        let Some(final_value) = computation.series.final_value() else {
            return Vec::new();
        };
        let change = final_value / params.initial_value - 1.0;

        vec![
            Line::from(vec![
                Span::styled(
                    format!("Year {}: ", params.years),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_value(final_value)),
            ]),
            Line::from(Span::styled(
                format!("{} vs. initial", format_change(change)),
                Style::default().fg(change_color(change)),
            )),
        ]
    }

    fn edit_text(key: &AppKeyEvent, field: &mut TextField) -> Option<bool> {
        let changed = match key.code {
            KeyCode::Char(c) if key.no_modifiers() && is_numeric_char(c) => {
                field.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                field.backspace();
                true
            }
            KeyCode::Delete => {
                field.delete();
                true
            }
            KeyCode::Left => {
                field.move_cursor_left();
                false
            }
            KeyCode::Right => {
                field.move_cursor_right();
                false
            }
            KeyCode::Home => {
                field.move_cursor_home();
                false
            }
            KeyCode::End => {
                field.move_cursor_end();
                false
            }
            _ => return None,
        };
        Some(changed)
    }
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        if key.is_back_tab() {
            state.form.focus_prev();
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                state.form.focus_next();
                return EventResult::Handled;
            }
            KeyCode::Up => {
                state.form.focus_prev();
                return EventResult::Handled;
            }
            _ => {}
        }

        let focused = state.form.focused;
        if let Some(field) = state.form.text_field_mut(focused) {
            return match Self::edit_text(key, field) {
                Some(changed) => {
                    if changed {
                        state.recompute();
                    }
                    EventResult::Handled
                }
                None => EventResult::NotHandled,
            };
        }

        let form = &mut state.form;
        match (focused, &key.code) {
            (FormField::Frequency, KeyCode::Left) => form.frequency = form.frequency.prev(),
            (FormField::Frequency, KeyCode::Right | KeyCode::Char(' ')) => {
                form.frequency = form.frequency.next()
            }
            (FormField::Direction, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                form.direction = form.direction.toggle()
            }
            _ => return EventResult::NotHandled,
        }

        state.recompute();
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Self::field_lines(&state.form);
        lines.extend(Self::summary_lines(state));

        let paragraph = Paragraph::new(lines).block(focused_block(" PARAMETERS ", true));
        frame.render_widget(paragraph, area);
    }
}

/// Render a text field's value, highlighting the cursor cell when focused.
fn render_text_field(field: &TextField, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    if !focused {
        spans.push(Span::raw(field.value.clone()));
        return Line::from(spans);
    }

    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let chars: Vec<char> = field.value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == field.cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    // Cursor past the last character
    if field.cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}
