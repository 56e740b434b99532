//! Add Expense view
//!
//! Date, category, description and amount, submitted as one form.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controller::add_expense::FORM_DATE_FORMAT;
use crate::controller::ExpenseForm;
use crate::models::Category;
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::TextInput;

/// Which field is focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Description,
    Amount,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
        }
    }
}

/// State for the Add Expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub date: TextInput,
    pub category: Category,
    pub description: TextInput,
    pub amount: TextInput,
}

impl ExpenseFormState {
    /// Empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused_field: ExpenseField::Date,
            date: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(FORM_DATE_FORMAT).to_string()),
            category: Category::default(),
            description: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount: TextInput::new().label("Amount").placeholder("0.00"),
        }
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input, if the focused field is free text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Date => Some(&mut self.date),
            ExpenseField::Category => None,
            ExpenseField::Description => Some(&mut self.description),
            ExpenseField::Amount => Some(&mut self.amount),
        }
    }

    /// Type a character into the focused field
    ///
    /// On the category field the first letter jumps to a matching category.
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            ExpenseField::Category => {
                if let Some(found) = Category::ALL
                    .iter()
                    .find(|cat| cat.label().starts_with(c.to_ascii_uppercase()))
                {
                    self.category = *found;
                }
            }
            ExpenseField::Amount => {
                if c.is_ascii_digit() || matches!(c, '.' | ',' | '$') {
                    self.amount.insert(c);
                }
            }
            _ => {
                if let Some(input) = self.focused_input() {
                    input.insert(c);
                }
            }
        }
    }

    /// Cycle the category
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
    }

    /// The raw form for the controller
    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.date.value(),
            self.category.label(),
            self.description.value(),
            self.amount.value(),
        )
    }

    /// Ready the form for the next entry; date and category are kept
    pub fn clear_after_submit(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.focused_field = ExpenseField::Description;
    }
}

/// Render the Add Expense page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.expense_form;

    let border_color = if editing { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Date
            Constraint::Length(2), // Category
            Constraint::Length(2), // Description
            Constraint::Length(2), // Amount
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let focused = |field: ExpenseField| editing && form.focused_field == field;

    frame.render_widget(
        form.date.clone().focused(focused(ExpenseField::Date)),
        rows[0],
    );

    let category_style = if focused(ExpenseField::Category) {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("◀ {} ▶", form.category), category_style),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[1]);

    frame.render_widget(
        form.description
            .clone()
            .focused(focused(ExpenseField::Description)),
        rows[2],
    );
    frame.render_widget(
        form.amount.clone().focused(focused(ExpenseField::Amount)),
        rows[3],
    );

    let hints = if editing {
        "Tab/Shift+Tab: next/prev field   ←/→: change category   Enter: Add Expense   Esc: stop editing"
    } else {
        "Press Enter or 'a' to start filling in the form"
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        rows[4],
    );
}
