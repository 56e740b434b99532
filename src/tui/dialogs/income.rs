//! Income dialog
//!
//! Sets the monthly income shown on the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the income dialog
#[derive(Debug, Clone, Default)]
pub struct IncomeFormState {
    /// Amount input
    pub input: TextInput,
    /// Income when the dialog was opened
    pub current: Money,
    /// Error message
    pub error_message: Option<String>,
}

impl IncomeFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().label("Amount").placeholder("0.00"),
            ..Self::default()
        }
    }

    /// Prefill with the current income
    pub fn init(&mut self, current: Money) {
        self.current = current;
        self.error_message = None;
        if current.is_zero() {
            self.input.clear();
        } else {
            self.input.set_value(current.to_decimal_string());
        }
    }

    /// Accept digits and money punctuation only
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || matches!(c, '.' | ',' | '$' | '-') {
            self.input.insert(c);
            self.error_message = None;
        }
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.income_form;

    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Monthly Income ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current income
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current_line = Line::from(vec![
        Span::styled("Current: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            state.current.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[0]);

    frame.render_widget(state.input.clone().focused(true), chunks[2]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Update Income  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the income dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            app.submit_income();
            true
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.income_form.input.clear();
            true
        }
        KeyCode::Char(c) => {
            app.income_form.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            app.income_form.input.backspace();
            true
        }
        KeyCode::Delete => {
            app.income_form.input.delete();
            true
        }
        KeyCode::Left => {
            app.income_form.input.move_left();
            true
        }
        KeyCode::Right => {
            app.income_form.input.move_right();
            true
        }
        KeyCode::Home => {
            app.income_form.input.move_start();
            true
        }
        KeyCode::End => {
            app.income_form.input.move_end();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_prefills_current_income() {
        let mut state = IncomeFormState::new();
        state.init(Money::from_cents(250050));
        assert_eq!(state.input.value(), "2500.50");

        state.init(Money::zero());
        assert_eq!(state.input.value(), "");
    }

    #[test]
    fn test_insert_filters_characters() {
        let mut state = IncomeFormState::new();
        for c in "1a,0b00.5".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input.value(), "1,000.5");
    }
}
