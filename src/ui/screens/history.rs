use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Transaction;
use crate::state::CategoryFilter;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

/// The filtered, sorted transaction history. `listing` comes fresh from the
/// tracker each frame; nothing here is cached.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, listing: &[&Transaction]) {
    let title = format!(
        " Transactions ({}) | filter: {} | sort: {} ",
        listing.len(),
        app.filter,
        app.sort,
    );

    if listing.is_empty() {
        let msg = if app.filter == CategoryFilter::All {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a to add your first transaction",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No {} transactions", app.filter),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press f to change the filter",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(title, theme::panel_title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = listing
        .iter()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.history_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!(" {}", txn.date)),
                Cell::from(format!("{} {}", txn.category.glyph(), txn.category)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(Span::styled(
                    format_amount(txn.amount),
                    if i == app.history_index {
                        Style::default()
                            .fg(theme::HEADER_BG)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        theme::amount_style()
                    },
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(title, theme::panel_title_style())),
    );
    f.render_widget(table, area);
}
