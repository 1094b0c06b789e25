use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, EntryField, InputMode};
use crate::ui::theme;

/// The add-transaction form: four fields in a 2x2 grid, the focused one
/// highlighted while in ENTRY mode.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let active = app.input_mode == InputMode::Entry;
    let title = if active {
        " Add Transaction (Tab: next field, Enter: add, Esc: close) "
    } else {
        " Add Transaction (press a) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active {
            ratatui::style::Style::default().fg(theme::ACCENT)
        } else {
            theme::panel_border_style()
        })
        .title(Span::styled(title, theme::panel_title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_field(
        f,
        top[0],
        "Description",
        &app.entry.description,
        active && app.entry.field == EntryField::Description,
    );
    render_field(
        f,
        top[1],
        "Amount",
        &app.entry.amount,
        active && app.entry.field == EntryField::Amount,
    );
    render_field(
        f,
        bottom[0],
        "Category",
        &format!("{} {}", app.entry.category.glyph(), app.entry.category),
        active && app.entry.field == EntryField::Category,
    );
    render_field(
        f,
        bottom[1],
        "Date",
        &app.entry.date,
        active && app.entry.field == EntryField::Date,
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let value_style = if focused {
        theme::selected_style()
    } else {
        theme::normal_style()
    };
    let shown = if value.is_empty() && !focused {
        Span::styled("…", theme::dim_style())
    } else {
        Span::styled(value.to_string(), value_style)
    };
    let cursor = if focused && label != "Category" {
        Span::styled("▏", ratatui::style::Style::default().fg(theme::ACCENT))
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(format!(" {label:<12}"), theme::dim_style()),
        shown,
        cursor,
    ]);
    f.render_widget(Paragraph::new(line), area);
}
