use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::Tracker;

use super::app::{App, InputMode};
use super::theme;

/// Rows of the history table rendered at a given terminal height. Must
/// match the layout below: status and command bars (2), summary cards (5),
/// entry form (4), and the table's border plus header row (3) all sit
/// around the table. The cursor page size is derived from this so scrolling
/// can never move the cursor past the last rendered row.
pub(crate) fn history_rows(total_height: u16) -> usize {
    (total_height.saturating_sub(14) as usize).max(1)
}

pub(crate) fn render(f: &mut Frame, app: &App, tracker: &Tracker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(chunks[0]);

    super::screens::sidebar::render(f, columns[0], app, tracker);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Length(4), // Add-transaction form
            Constraint::Min(5),    // History
        ])
        .split(columns[1]);

    super::screens::summary::render(f, main[0], app, tracker);
    super::screens::entry::render(f, main[1], app);

    let listing = tracker.list(app.filter, app.sort);
    super::screens::history::render(f, main[2], app, &listing);

    render_status_bar(f, chunks[1], app, tracker);
    render_command_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, tracker: &Tracker) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Entry | InputMode::Budget | InputMode::CategoryBudget => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | {} | {} txns",
        app.filter,
        app.sort,
        tracker.transactions().len()
    );

    let right = match app.input_mode {
        InputMode::Normal => " a add | b/B budgets | f filter | s sort | d delete | ? help ",
        InputMode::Entry => " Tab field | +/- category | Enter add | Esc close ",
        InputMode::Budget => " Enter set | Esc close ",
        InputMode::CategoryBudget => " Tab category | Enter set | Esc close ",
        InputMode::Confirm => " y confirm | n cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Confirm => Line::from(vec![
            Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        InputMode::Budget => Line::from(vec![
            Span::styled("budget> ", Style::default().fg(theme::GREEN)),
            Span::styled(&app.budget_draft, theme::command_bar_style()),
        ]),
        InputMode::CategoryBudget => Line::from(vec![
            Span::styled(
                format!("{} budget> ", app.sidebar_category()),
                Style::default().fg(theme::GREEN),
            ),
            Span::styled(&app.category_budget_draft, theme::command_bar_style()),
        ]),
        _ => {
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add a transaction, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            }
        }
    };

    let cursor_offset = match app.input_mode {
        InputMode::Budget => Some(8 + app.budget_draft.len() as u16),
        InputMode::CategoryBudget => Some(
            (app.sidebar_category().as_str().len() + 9 + app.category_budget_draft.len()) as u16,
        ),
        _ => None,
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " Khata Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/Ctrl-u    Half page down/up     q/Ctrl-q   Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Actions",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  a    Add transaction (Tab between fields, Enter to add)",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  b    Set monthly budget                B    Set category budgets",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  f    Cycle category filter             s    Cycle sort order",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  d    Delete transaction under cursor (y/N to confirm)",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Invalid input is dropped quietly: nothing changes, drafts stay.",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
