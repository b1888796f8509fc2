use std::io;

use compound_core::Parameters;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::components::{
    Component, EventResult, form_panel::FormPanel, results_table::ResultsTable,
    series_chart::SeriesChart, status_bar::StatusBar,
};
use crate::event::{AppKeyEvent, KeyCode};
use crate::layout::{AppLayout, render_header};
use crate::platform::{Exporter, run_pending_export};
use crate::state::AppState;

/// Terminal application: one form, one table, one chart.
pub struct App {
    state: AppState,
    exporter: Box<dyn Exporter>,
    form_panel: FormPanel,
    results_table: ResultsTable,
    series_chart: SeriesChart,
    status_bar: StatusBar,
}

impl App {
    pub fn new(initial: &Parameters, exporter: Box<dyn Exporter>) -> Self {
        Self {
            state: AppState::new(initial),
            exporter,
            form_panel: FormPanel::new(),
            results_table: ResultsTable::new(),
            series_chart: SeriesChart::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Compound calculator started");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let layout = AppLayout::split(frame.area());

        render_header(frame, layout.header, &self.state);
        self.form_panel.render(frame, layout.form, &self.state);
        self.results_table.render(frame, layout.table, &self.state);
        self.series_chart.render(frame, layout.chart, &self.state);
        self.status_bar.render(frame, layout.status, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key(AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    /// Dispatch a key: global bindings first, then the form, then the table.
    pub fn handle_key(&mut self, key: AppKeyEvent) {
        if key.is_quit() {
            tracing::info!("Exit requested");
            self.state.exit = true;
            return;
        }

        if key.is_export() {
            self.state.request_export();
            run_pending_export(&mut self.state, self.exporter.as_ref());
            return;
        }

        if matches!(key.code, KeyCode::Esc) {
            self.state.clear_status();
            return;
        }

        if self.form_panel.handle_key(&key, &mut self.state) != EventResult::NotHandled {
            return;
        }

        self.results_table.handle_key(&key, &mut self.state);
    }
}
