//! Export Data view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::controller::ExportStatus;
use crate::tui::app::App;

/// Render the Export Data page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Export Data ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = app.controller.export_status();
    let mut lines = Vec::new();

    match status {
        ExportStatus::Empty => {
            lines.push(Line::styled(
                status.message(),
                Style::default().fg(Color::Yellow),
            ));
        }
        ExportStatus::Ready { .. } => {
            lines.push(Line::from(status.message()));
            lines.push(Line::from(""));
            lines.push(section("Export to CSV"));
            lines.push(action_line("c", "Download CSV File"));
            lines.push(Line::from(""));
            lines.push(section("Export to PDF"));
            lines.push(action_line("p", "Generate PDF Report"));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Saving to: ", Style::default().fg(Color::DarkGray)),
                Span::raw(app.export_dir().display().to_string()),
            ]));
        }
    }

    if !app.exported.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Saved this session"));
        for path in app.exported.iter().rev() {
            lines.push(Line::styled(
                format!("  {}", path.display()),
                Style::default().fg(Color::Green),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn action_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}
