//! Line chart of the series value by year.

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::format_compact;
use crate::util::styles::{HELP_COLOR, SERIES_COLOR, focused_block};
use compound_core::{Parameters, Series};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

pub struct SeriesChart;

impl SeriesChart {
    pub fn new() -> Self {
        Self
    }

    /// Chart title, e.g. "Compound Growth Over 10 Year(s) (Annually)".
    ///
    /// Frequencies outside the offered choices are shown as periods per year.
    pub fn title(params: &Parameters) -> String {
        let frequency = params
            .compounding()
            .map(|f| f.label().to_string())
            .unwrap_or_else(|| format!("{}x per year", params.compounding_frequency));
        format!(
            "Compound {} Over {} Year(s) ({})",
            params.direction.label(),
            params.years,
            frequency
        )
    }

    /// Y axis bounds padded by 10% of the range so the line never touches the
    /// border. The axis is not anchored at zero.
    ///
    /// Only finite values count; a series with none gets `[0, 1]`.
    pub fn y_bounds(series: &Series) -> [f64; 2] {
        let range = series
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            });
        let Some((min, max)) = range else {
            return [0.0, 1.0];
        };

        let range = max - min;
        let padding = if range > 0.0 {
            range * 0.1
        } else {
            (max.abs() * 0.1).max(1.0)
        };
        [(min - padding).max(f64::MIN), (max + padding).min(f64::MAX)]
    }

    /// X axis labels: first year, midpoint and last year. The midpoint is
    /// left out when it would not be a distinct whole year.
    pub fn x_labels(years: u32) -> Vec<String> {
        if years < 2 {
            return vec!["Year 0".to_string(), format!("Year {years}")];
        }
        vec![
            "Year 0".to_string(),
            format!("Year {:.0}", f64::from(years) / 2.0),
            format!("Year {years}"),
        ]
    }
}

impl Default for SeriesChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SeriesChart {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Ok(computation) = &state.computation else {
            let paragraph = Paragraph::new(Line::from("No chart for the current input"))
                .style(Style::default().fg(HELP_COLOR))
                .block(focused_block(" CHART ", false));
            frame.render_widget(paragraph, area);
            return;
        };

        let params = &computation.parameters;
        let series = &computation.series;
        let block = focused_block(&format!(" {} ", Self::title(params)), false);

        let data: Vec<(f64, f64)> = series
            .iter()
            .filter(|p| p.value.is_finite())
            .map(|p| (f64::from(p.year), p.value))
            .collect();

        let dataset = Dataset::default()
            .name("Value")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SERIES_COLOR))
            .data(&data);

        let years = f64::from(params.years);
        let x_labels: Vec<Span> = Self::x_labels(params.years)
            .into_iter()
            .map(Span::raw)
            .collect();

        let [y_min, y_max] = Self::y_bounds(series);
        let y_labels = vec![
            Span::raw(format_compact(y_min)),
            Span::raw(format_compact((y_min + y_max) / 2.0)),
            Span::raw(format_compact(y_max)),
        ];

        let x_axis = Axis::default()
            .title("Year".dark_gray())
            .bounds([0.0, years])
            .labels(x_labels);

        let y_axis = Axis::default()
            .title("Value".dark_gray())
            .bounds([y_min, y_max])
            .labels(y_labels);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}
