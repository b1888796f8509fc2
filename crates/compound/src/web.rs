//! Web entry point using ratzilla.
//!
//! The same components as the terminal build are rendered into the page by
//! ratzilla's DOM backend; exports become browser downloads.

use std::cell::RefCell;
use std::rc::Rc;

use compound_core::Parameters;
use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::{
    Component, EventResult, form_panel::FormPanel, results_table::ResultsTable,
    series_chart::SeriesChart, status_bar::StatusBar,
};
use crate::event::{AppKeyEvent, KeyCode};
use crate::layout::{AppLayout, render_header};
use crate::platform::{BrowserDownload, run_pending_export};
use crate::state::AppState;

/// Web application state wrapped for callback access.
struct WebApp {
    state: AppState,
    exporter: BrowserDownload,
    form_panel: FormPanel,
    results_table: ResultsTable,
    series_chart: SeriesChart,
    status_bar: StatusBar,
}

impl WebApp {
    fn new() -> Self {
        Self {
            state: AppState::new(&Parameters::default()),
            exporter: BrowserDownload::new(),
            form_panel: FormPanel::new(),
            results_table: ResultsTable::new(),
            series_chart: SeriesChart::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Handle a key event. There is no process to exit in the browser, so the
    /// quit keys are ignored.
    fn handle_key(&mut self, key: AppKeyEvent) {
        if key.is_export() {
            self.state.request_export();
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

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let layout = AppLayout::split(frame.area());

        render_header(frame, layout.header, &self.state);
        self.form_panel.render(frame, layout.form, &self.state);
        self.results_table.render(frame, layout.table, &self.state);
        self.series_chart.render(frame, layout.chart, &self.state);
        self.status_bar.render(frame, layout.status, &self.state);
    }
}

/// Stop the browser from acting on Tab, paging keys and Ctrl+S.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        let ctrl = event.ctrl_key() || event.meta_key();

        let should_prevent = matches!(key.as_str(), "Tab" | "PageUp" | "PageDown")
            || (ctrl && key.eq_ignore_ascii_case("s"));

        if should_prevent {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // The listener lives for the lifetime of the page
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("Compound web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(WebApp::new()));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        app_clone.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        let mut app = app.borrow_mut();

        // Queued exports run on the render tick
        let WebApp {
            state, exporter, ..
        } = &mut *app;
        run_pending_export(state, &*exporter);

        app.draw(frame);
    });

    Ok(())
}
