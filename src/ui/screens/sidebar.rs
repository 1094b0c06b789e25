use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Category;
use crate::state::Tracker;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar};

/// Per-category budget cards: glyph, label, budget, spent and percent used.
/// The row under edit shows its draft inline while in CAT BUDGET mode.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, tracker: &Tracker) {
    let editing = app.input_mode == InputMode::CategoryBudget;

    let mut lines: Vec<Line> = Vec::new();
    for (i, cat) in Category::all().iter().enumerate() {
        let budget = tracker.category_budget(*cat);
        let spent = tracker.category_spent(*cat);
        let pct = tracker.category_percentage(*cat);
        let ratio = if budget > Decimal::ZERO {
            (spent / budget).to_f64().unwrap_or(0.0)
        } else {
            0.0
        };

        let selected = editing && i == app.sidebar_index;
        let name_style = if selected {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        let bar_color = if ratio > 0.9 {
            theme::RED
        } else if ratio > 0.7 {
            theme::YELLOW
        } else {
            theme::GREEN
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cat.glyph()), theme::normal_style()),
            Span::styled(format!("{:<13}", cat.as_str()), name_style),
            Span::styled(
                format_amount(budget),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        if selected {
            lines.push(Line::from(vec![
                Span::styled("    budget> ", Style::default().fg(theme::GREEN)),
                Span::styled(&app.category_budget_draft, theme::normal_style()),
                Span::styled("▏", Style::default().fg(theme::GREEN)),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("    Spent: {} ", format_amount(spent)),
                theme::dim_style(),
            ),
            Span::styled(
                format!("({:.0}% used)", pct),
                Style::default().fg(bar_color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", progress_bar(ratio, 18)),
            Style::default().fg(bar_color),
        )));
        lines.push(Line::from(""));
    }

    let title = if editing {
        " Category Budgets (Tab: next, Enter: set) "
    } else {
        " Category Budgets "
    };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(title, theme::panel_title_style())),
    );
    f.render_widget(panel, area);
}
