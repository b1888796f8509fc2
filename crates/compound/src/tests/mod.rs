//! Tests that drive the whole application through key events
//!
//! - `form_input` - Editing the form and the resulting recomputation
//! - `key_dispatch` - Global bindings: quit, export, status, scrolling
//! - `rendering` - Drawing the full screen into a test backend

mod key_dispatch;

use crate::App;
use crate::event::{AppKeyEvent, KeyCode};
use crate::platform::FileExporter;
use compound_core::Parameters;
use ratatui::{Terminal, backend::TestBackend};
use std::path::Path;

fn app_with_export_dir(dir: &Path) -> App {
    App::new(
        &Parameters::default(),
        Box::new(FileExporter::new(dir.to_path_buf())),
    )
}

fn app() -> App {
    app_with_export_dir(Path::new("."))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(AppKeyEvent::plain(code));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn clear_field(app: &mut App) {
    press(app, KeyCode::End);
    for _ in 0..32 {
        press(app, KeyCode::Backspace);
    }
}

/// Draw the whole screen at 120x40 and return its text.
fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}
