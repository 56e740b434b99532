//! Status bar view
//!
//! Shows the current page, the expense count and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::Page;
use crate::tui::app::{App, InputMode};

/// Key hints for the current page and mode
pub fn hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " Enter:Submit  Tab:Next field  Esc:Done ";
    }
    match app.page() {
        Page::Dashboard => " i:Set income  1-4:Pages  ?:Help  q:Quit ",
        Page::AddExpense => " a/Enter:Edit form  1-4:Pages  ?:Help  q:Quit ",
        Page::ViewExpenses => " Space:Toggle  d:Dates  r:Reset  ?:Help  q:Quit ",
        Page::ExportData => " c:CSV  p:PDF  1-4:Pages  ?:Help  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = app.controller.store().len();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.page()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} expense{}", count, if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::White),
        ),
    ];

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
