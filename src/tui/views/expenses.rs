//! View Expenses view
//!
//! Category toggles and a date range on the left, the filtered table and
//! its summary on the right.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::controller::add_expense::FORM_DATE_FORMAT;
use crate::controller::{ExpenseListView, ExpenseQuery, ViewController};
use crate::display::{format_date, truncate};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Category;
use crate::storage::DateRange;
use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::layout::ExpenseListLayout;
use crate::tui::widgets::TextInput;

/// Which date input is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    Start,
    End,
}

/// Filter state for the expense list
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Explicit category choice; `None` means every category present
    pub categories: Option<BTreeSet<Category>>,
    /// Explicit range; `None` means the full span of recorded dates
    pub range: Option<DateRange>,
    /// Highlighted category in the toggle list
    pub cursor: usize,
    pub start: TextInput,
    pub end: TextInput,
    pub range_field: RangeField,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            categories: None,
            range: None,
            cursor: 0,
            start: TextInput::new().label("From").placeholder("first"),
            end: TextInput::new().label("To").placeholder("last"),
            range_field: RangeField::Start,
        }
    }

    /// Back to "everything recorded"
    pub fn reset(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::new()
        };
    }

    /// Query for the controller
    pub fn query(&self) -> ExpenseQuery {
        ExpenseQuery {
            categories: self.categories.clone(),
            range: self.range,
        }
    }

    /// Move the category cursor
    pub fn move_cursor(&mut self, down: bool, available: usize) {
        if down {
            if self.cursor + 1 < available {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Toggle the category under the cursor
    pub fn toggle_at_cursor(&mut self, available: &[Category]) {
        let Some(category) = available.get(self.cursor).copied() else {
            return;
        };
        let selected = self
            .categories
            .get_or_insert_with(|| available.iter().copied().collect());
        if !selected.remove(&category) {
            selected.insert(category);
        }
    }

    /// The date input being edited
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.range_field {
            RangeField::Start => &mut self.start,
            RangeField::End => &mut self.end,
        }
    }

    /// Switch between the two date inputs
    pub fn switch_range_field(&mut self) {
        self.range_field = match self.range_field {
            RangeField::Start => RangeField::End,
            RangeField::End => RangeField::Start,
        };
    }

    /// Parse the typed dates into the active range
    ///
    /// Both empty clears the range; only a start date selects that single
    /// day. The previous range is kept when parsing fails.
    pub fn apply_range(&mut self) -> TrackerResult<()> {
        let start = parse_optional_date(self.start.value())?;
        let end = parse_optional_date(self.end.value())?;

        self.range = match (start, end) {
            (None, None) => None,
            (Some(start), end) => Some(ViewController::date_range(start, end)?),
            (None, Some(_)) => {
                return Err(TrackerError::validation("Enter a start date for the range."))
            }
        };
        Ok(())
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_optional_date(text: &str) -> TrackerResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, FORM_DATE_FORMAT)
        .map(Some)
        .map_err(|_| TrackerError::validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", text)))
}

/// Render the View Expenses page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.controller.view_expenses(&app.filter.query());

    if let Some(message) = view.empty_message() {
        let block = Block::default()
            .title(" All Expenses ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Blue)),
            area,
        );
        return;
    }

    let layout = ExpenseListLayout::new(area);
    render_filters(frame, app, &view, layout.filters);
    render_table(frame, app, &view, layout.table);
    render_summary(frame, &view, layout.summary);
}

fn render_filters(frame: &mut Frame, app: &App, view: &ExpenseListView, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Main;
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Categories
            Constraint::Length(4), // Date range
        ])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        "Category",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, category) in view.available_categories.iter().enumerate() {
        let checked = view.selected_categories.contains(category);
        let style = if focused && i == app.filter.cursor {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("[{}] {}", if checked { "x" } else { " " }, category),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let range_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let applied = view
        .range
        .map(|r| r.to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Dates ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(applied, Style::default().fg(Color::DarkGray)),
        ])),
        range_rows[0],
    );
    frame.render_widget(
        app.filter
            .start
            .clone()
            .focused(editing && app.filter.range_field == RangeField::Start),
        range_rows[1],
    );
    frame.render_widget(
        app.filter
            .end
            .clone()
            .focused(editing && app.filter.range_field == RangeField::End),
        range_rows[2],
    );
}

fn render_table(frame: &mut Frame, app: &mut App, view: &ExpenseListView, area: Rect) {
    let header = Row::new(["Date", "Category", "Description", "Amount"].map(|title| {
        Cell::from(title).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let date_format = app.settings.date_format.clone();
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(format_date(expense.date, &date_format)),
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
    .block(
        Block::default()
            .title(" All Expenses ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    if app.selected_row >= view.rows.len() {
        app.selected_row = view.rows.len().saturating_sub(1);
    }
    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_summary(frame: &mut Frame, view: &ExpenseListView, area: Rect) {
    let summary = &view.summary;
    let line = Line::from(vec![
        Span::styled("Total Expenses: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Number of Transactions: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.count.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Average Expense: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.average.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
