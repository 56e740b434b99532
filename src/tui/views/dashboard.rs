//! Dashboard view
//!
//! Income, spending and balance metrics, the category chart and the most
//! recent transactions.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::{format_chart, format_date, truncate};
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Space taken by label, amount and percentage columns in a chart row
const CHART_TEXT_WIDTH: u16 = 36;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.controller.dashboard();
    let layout = DashboardLayout::new(area);

    let balance_color = if view.over_budget {
        Color::Red
    } else {
        Color::Green
    };
    render_metric(frame, layout.metrics[0], "Monthly Income", view.monthly_income, Color::White);
    render_metric(frame, layout.metrics[1], "Total Expenses", view.total_expenses, Color::Yellow);
    render_metric(
        frame,
        layout.metrics[2],
        "Remaining Balance",
        view.remaining_balance,
        balance_color,
    );

    // Chart
    let chart_block = Block::default()
        .title(" Expense Distribution by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let bar_width = chart_block
        .inner(layout.chart)
        .width
        .saturating_sub(CHART_TEXT_WIDTH)
        .max(4) as usize;
    let chart_lines: Vec<Line> = if view.category_breakdown.is_empty() {
        vec![Line::styled(
            "No spending recorded yet.",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        format_chart(&view.category_breakdown, bar_width)
            .into_iter()
            .map(Line::from)
            .collect()
    };
    frame.render_widget(Paragraph::new(chart_lines).block(chart_block), layout.chart);

    // Recent transactions
    let recent_block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(message) = view.empty_message() {
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::Blue))
                .block(recent_block),
            layout.recent,
        );
        return;
    }

    let header = Row::new(["Date", "Category", "Description", "Amount"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = view
        .recent
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(format_date(expense.date, &app.settings.date_format)),
                Cell::from(expense.category.label()),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(Line::from(expense.amount.to_string()).right_aligned()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(recent_block);

    frame.render_widget(table, layout.recent);
}

fn render_metric(frame: &mut Frame, area: Rect, title: &str, value: Money, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(value.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(paragraph, area);
}
