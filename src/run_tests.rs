#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use crossterm::event::KeyEvent;

use crate::models::Category;
use crate::ui::render::history_rows;

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn tracker_with(n: usize) -> Tracker {
    let mut tracker = Tracker::new();
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    for i in 0..n {
        tracker
            .add_transaction(&format!("txn {i}"), "10", Category::Food, date)
            .unwrap();
    }
    tracker
}

// ── Quit bindings ─────────────────────────────────────────────

#[test]
fn test_quit_bindings() {
    for event in [key(KeyCode::Char('q')), ctrl('q'), ctrl('c')] {
        let mut app = App::new();
        let mut tracker = Tracker::new();
        handle_normal_input(event, &mut app, &mut tracker);
        assert!(!app.running, "{event:?} should quit");
    }
}

#[test]
fn test_plain_c_does_not_quit() {
    let mut app = App::new();
    let mut tracker = Tracker::new();
    handle_normal_input(key(KeyCode::Char('c')), &mut app, &mut tracker);
    assert!(app.running);
}

// ── History paging ────────────────────────────────────────────

#[test]
fn test_history_rows_matches_rendered_window() {
    // 30-row terminal: 2 bars + 5 summary + 4 entry + 2 border + 1 header
    // leave 16 table rows.
    assert_eq!(history_rows(30), 16);
}

#[test]
fn test_history_rows_tiny_terminal() {
    assert_eq!(history_rows(0), 1);
    assert_eq!(history_rows(14), 1);
}

fn assert_cursor_rendered(app: &App) {
    assert!(
        app.history_index >= app.history_scroll
            && app.history_index < app.history_scroll + app.visible_rows,
        "cursor at row {} but rendered rows are {}..{}",
        app.history_index,
        app.history_scroll,
        app.history_scroll + app.visible_rows
    );
}

#[test]
fn test_goto_bottom_keeps_cursor_rendered() {
    let mut app = App::new();
    app.visible_rows = history_rows(30);
    let mut tracker = tracker_with(50);

    handle_normal_input(key(KeyCode::Char('G')), &mut app, &mut tracker);
    assert_eq!(app.history_index, 49);
    assert_cursor_rendered(&app);
}

#[test]
fn test_step_down_keeps_cursor_rendered() {
    let mut app = App::new();
    app.visible_rows = history_rows(30);
    let mut tracker = tracker_with(50);

    for _ in 0..60 {
        handle_normal_input(key(KeyCode::Char('j')), &mut app, &mut tracker);
        assert_cursor_rendered(&app);
    }
    assert_eq!(app.history_index, 49);
}

#[test]
fn test_half_page_down_keeps_cursor_rendered() {
    let mut app = App::new();
    app.visible_rows = history_rows(30);
    let mut tracker = tracker_with(50);

    for _ in 0..10 {
        handle_normal_input(ctrl('d'), &mut app, &mut tracker);
        assert_cursor_rendered(&app);
    }
    assert_eq!(app.history_index, 49);
}

#[test]
fn test_delete_targets_the_rendered_cursor_row() {
    let mut app = App::new();
    app.visible_rows = history_rows(30);
    let mut tracker = tracker_with(50);

    handle_normal_input(key(KeyCode::Char('G')), &mut app, &mut tracker);
    assert_cursor_rendered(&app);

    handle_normal_input(key(KeyCode::Char('d')), &mut app, &mut tracker);
    let listing = tracker.list(app.filter, app.sort);
    let under_cursor = listing[app.history_index].id;
    assert_eq!(app.pending_delete, Some(under_cursor));
    assert_eq!(app.input_mode, InputMode::Confirm);
}
