//! Sidebar view
//!
//! Shows the app title, the page menu and a balance summary

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::controller::Page;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_menu(frame, app, layout.menu);
    render_summary(frame, app, layout.summary);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the page menu
fn render_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let active = app.page();
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let style = if *page == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if *page == active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(
                    format!("[{}] ", page.index() + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(page.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.menu_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the balance summary
fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let store = app.controller.store();
    let remaining = store.remaining_balance();
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(Span::styled("Income", Style::default().fg(Color::DarkGray))),
        Line::from(format!("{:>20}", store.monthly_income())),
        Line::from(Span::styled("Remaining", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("{:>20}", remaining),
            Style::default().fg(remaining_color),
        )),
    ];

    let block = Block::default()
        .title(" Balance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
