use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::Category;
use crate::state::Tracker;
use crate::ui::app::{App, EntryField, InputMode};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(tracker: &mut Tracker) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tracker);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tracker: &mut Tracker,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = crate::ui::render::history_rows(f.area().height);
            crate::ui::render::render(f, app, tracker);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, tracker),
                InputMode::Entry => handle_entry_input(key, app, tracker),
                InputMode::Budget => handle_budget_input(key, app, tracker),
                InputMode::CategoryBudget => handle_category_budget_input(key, app, tracker),
                InputMode::Confirm => handle_confirm_input(key, app, tracker),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, tracker: &mut Tracker) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('a') => {
            app.input_mode = InputMode::Entry;
            app.status_message.clear();
        }
        KeyCode::Char('b') => {
            app.input_mode = InputMode::Budget;
            app.status_message.clear();
        }
        KeyCode::Char('B') => {
            app.input_mode = InputMode::CategoryBudget;
            app.category_budget_draft.clear();
            app.status_message.clear();
        }
        KeyCode::Char('f') => {
            app.filter = app.filter.next();
            app.history_index = 0;
            app.history_scroll = 0;
        }
        KeyCode::Char('s') => {
            app.sort = app.sort.next();
            app.history_index = 0;
            app.history_scroll = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = tracker.list(app.filter, app.sort).len();
            scroll_down(
                &mut app.history_index,
                &mut app.history_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.history_index, &mut app.history_scroll);
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.history_index, &mut app.history_scroll),
        KeyCode::Char('G') => {
            let len = tracker.list(app.filter, app.sort).len();
            scroll_to_bottom(
                &mut app.history_index,
                &mut app.history_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let len = tracker.list(app.filter, app.sort).len();
            for _ in 0..app.visible_rows / 2 {
                scroll_down(
                    &mut app.history_index,
                    &mut app.history_scroll,
                    len,
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                scroll_up(&mut app.history_index, &mut app.history_scroll);
            }
        }
        KeyCode::Char('d') => {
            if let Some(txn) = tracker.list(app.filter, app.sort).get(app.history_index) {
                app.confirm_message = format!("Delete '{}'?", txn.description);
                app.pending_delete = Some(txn.id);
                app.input_mode = InputMode::Confirm;
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_entry_input(key: event::KeyEvent, app: &mut App, tracker: &mut Tracker) {
    match key.code {
        KeyCode::Esc => {
            // Drafts are kept; the form reopens as it was left.
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => app.entry.field = app.entry.field.next(),
        KeyCode::BackTab | KeyCode::Up => app.entry.field = app.entry.field.prev(),
        KeyCode::Left | KeyCode::Char('-') if app.entry.field == EntryField::Category => {
            app.entry.category = app.entry.category.prev();
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=')
            if app.entry.field == EntryField::Category =>
        {
            app.entry.category = app.entry.category.next();
        }
        KeyCode::Enter => submit_entry(app, tracker),
        KeyCode::Backspace => {
            if let Some(draft) = app.entry.focused_draft() {
                draft.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(draft) = app.entry.focused_draft() {
                draft.push(c);
            }
        }
        _ => {}
    }
}

/// Validation is the tracker's job; an invalid form is a silent no-op and
/// the drafts stay put. An unparsable date draft is rejected the same way.
fn submit_entry(app: &mut App, tracker: &mut Tracker) {
    let Ok(date) = NaiveDate::parse_from_str(app.entry.date.trim(), "%Y-%m-%d") else {
        return;
    };

    let added = tracker.add_transaction(
        &app.entry.description,
        &app.entry.amount,
        app.entry.category,
        date,
    );

    if added.is_some() {
        let desc = app.entry.description.clone();
        app.entry.reset_after_submit();
        app.input_mode = InputMode::Normal;
        app.clamp_history(tracker);
        app.set_status(format!("Added: {desc}"));
    }
}

fn handle_budget_input(key: event::KeyEvent, app: &mut App, tracker: &mut Tracker) {
    match key.code {
        KeyCode::Enter => {
            // Accepted drafts are cleared; a rejected draft stays for editing.
            if tracker.set_overall_budget(&app.budget_draft) {
                app.budget_draft.clear();
                app.input_mode = InputMode::Normal;
                app.set_status("Monthly budget set");
            }
        }
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.budget_draft.pop();
        }
        KeyCode::Char(c) => app.budget_draft.push(c),
        _ => {}
    }
}

fn handle_category_budget_input(key: event::KeyEvent, app: &mut App, tracker: &mut Tracker) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.sidebar_index = (app.sidebar_index + 1) % Category::all().len();
            app.category_budget_draft.clear();
        }
        KeyCode::BackTab | KeyCode::Up => {
            let len = Category::all().len();
            app.sidebar_index = (app.sidebar_index + len - 1) % len;
            app.category_budget_draft.clear();
        }
        KeyCode::Enter => {
            // Never rejects: a bad draft stores 0 for the category.
            let cat = app.sidebar_category();
            tracker.set_category_budget(cat, &app.category_budget_draft);
            app.category_budget_draft.clear();
            app.set_status(format!("{cat} budget set"));
        }
        KeyCode::Esc => {
            app.category_budget_draft.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.category_budget_draft.pop();
        }
        KeyCode::Char(c) => app.category_budget_draft.push(c),
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, tracker: &mut Tracker) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(id) = app.pending_delete.take() {
                if tracker.remove_transaction(id) {
                    app.clamp_history(tracker);
                    app.set_status("Deleted");
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_delete = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod run_tests;
