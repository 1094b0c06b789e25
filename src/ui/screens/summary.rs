use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::state::Tracker;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::format_amount;

/// The three overview cards: Total Budget, Spent, Remaining.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, tracker: &Tracker) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let pct = tracker.spent_percentage();

    let budget_sub = if app.input_mode == InputMode::Budget {
        format!("set> {}▏", app.budget_draft)
    } else {
        format!("{pct:.1}% allocated")
    };
    render_card(
        f,
        cards[0],
        "Total Budget",
        tracker.overall_budget(),
        theme::ACCENT,
        vec![budget_sub],
    );

    render_card(
        f,
        cards[1],
        "Spent",
        tracker.total_spent(),
        theme::ORANGE,
        vec![
            format!("{pct:.1}% of budget"),
            format!("{}/day average", format_amount(tracker.avg_per_day())),
        ],
    );

    let remaining = tracker.remaining();
    render_card(
        f,
        cards[2],
        "Remaining",
        remaining,
        if remaining >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        Vec::new(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitles: Vec<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border_style())
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()));

    let mut text = vec![Line::from(Span::styled(
        format_amount(amount),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    for sub in subtitles {
        text.push(Line::from(Span::styled(sub, theme::dim_style())));
    }

    f.render_widget(Paragraph::new(text).centered().block(block), area);
}
