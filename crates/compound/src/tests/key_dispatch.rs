use super::{app, app_with_export_dir, clear_field, press, render};
use crate::App;
use crate::event::{AppKeyEvent, KeyCode};
use crate::platform::FileExporter;
use crate::state::FormField;
use compound_core::Parameters;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_q_quits() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.state().exit);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = app();
    app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('c')));
    assert!(app.state().exit);
}

#[test]
fn test_export_writes_csv() {
    let dir = tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());

    press(&mut app, KeyCode::Char('s'));

    let path = dir.path().join("compound_growth_10years.csv");
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Year,Value");
    assert_eq!(lines[1], "0,100.00");
    assert_eq!(lines[11], "10,162.89");

    let status = app.state().status.as_ref().unwrap();
    assert!(!status.is_error);
    assert!(status.text.starts_with("Exported to"));
}

#[test]
fn test_ctrl_s_exports_decay_series() {
    let dir = tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    app.state_mut().form.focused = FormField::Direction;
    press(&mut app, KeyCode::Char(' '));

    app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('s')));

    let contents = fs::read_to_string(dir.path().join("compound_decay_10years.csv")).unwrap();
    assert!(contents.ends_with("10,59.87"));
}

#[test]
fn test_export_with_invalid_input_reports_error() {
    let dir = tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    clear_field(&mut app);

    press(&mut app, KeyCode::Char('s'));

    assert!(app.state().status.as_ref().is_some_and(|s| s.is_error));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();
    let mut app = app_with_export_dir(&blocker);

    press(&mut app, KeyCode::Char('s'));

    let status = app.state().status.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.starts_with("Export failed"));
}

#[test]
fn test_esc_clears_status() {
    let mut app = app();
    app.state_mut().set_info("hello");

    press(&mut app, KeyCode::Esc);
    assert!(app.state().status.is_none());
}

#[test]
fn test_scrolling_a_fully_visible_table_changes_nothing() {
    let mut app = app();
    app.state_mut().form.focused = FormField::Frequency;
    let before = render(&mut app);

    for _ in 0..10 {
        press(&mut app, KeyCode::Char(']'));
    }
    press(&mut app, KeyCode::PageDown);

    assert_eq!(app.state().table_scroll, 0);
    assert_eq!(render(&mut app), before);
}

#[test]
fn test_every_scroll_key_moves_the_table() {
    let mut app = App::new(
        &Parameters::new(100.0, 5.0, 40),
        Box::new(FileExporter::new(".".into())),
    );
    app.state_mut().form.focused = FormField::Frequency;
    let top = render(&mut app);

    press(&mut app, KeyCode::Char(']'));
    assert_ne!(render(&mut app), top);

    for _ in 0..10 {
        press(&mut app, KeyCode::PageDown);
    }
    let bottom = render(&mut app);
    let last_page = app.state().table_scroll;
    assert!(last_page > 0);

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.state().table_scroll, last_page);

    press(&mut app, KeyCode::Char('['));
    assert_ne!(render(&mut app), bottom);

    for _ in 0..10 {
        press(&mut app, KeyCode::PageUp);
    }
    assert_eq!(app.state().table_scroll, 0);
    assert_eq!(render(&mut app), top);
}
