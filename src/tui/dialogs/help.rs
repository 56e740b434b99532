//! Help dialog
//!
//! Shows keyboard shortcuts for the current page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::controller::Page;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.page()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for a page
pub fn help_lines(page: Page) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1-4", "Go to page"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move menu selection (sidebar)"),
        key_line("Enter", "Open selected page (sidebar)"),
        Line::from(""),
        heading(page.title()),
        Line::from(""),
    ];

    match page {
        Page::Dashboard => {
            lines.push(key_line("i", "Set monthly income"));
        }
        Page::AddExpense => {
            lines.push(key_line("a/Enter", "Start editing the form"));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Shift+Tab", "Previous field"));
            lines.push(key_line("←/→", "Change category"));
            lines.push(key_line("Enter", "Add expense"));
            lines.push(key_line("Esc", "Stop editing"));
        }
        Page::ViewExpenses => {
            lines.push(key_line("j/k", "Move category cursor"));
            lines.push(key_line("Space", "Toggle category"));
            lines.push(key_line("d", "Edit date range"));
            lines.push(key_line("r", "Reset filters"));
            lines.push(key_line("J/K", "Scroll table"));
        }
        Page::ExportData => {
            lines.push(key_line("c", "Save CSV export"));
            lines.push(key_line("p", "Generate and save PDF report"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
