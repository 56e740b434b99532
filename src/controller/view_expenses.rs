//! View Expenses page
//!
//! A filtered, date-sorted table with summary statistics.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use super::ViewController;
use crate::error::TrackerResult;
use crate::models::{Category, Expense};
use crate::reports::ExpenseSummary;
use crate::storage::{DateRange, ExpenseFilter};

/// Shown instead of the table when nothing has been recorded
pub const NO_EXPENSES: &str = "No expenses recorded yet. Add some expenses to see them here!";

/// User-chosen filter; unset parts fall back to "everything recorded"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub categories: Option<BTreeSet<Category>>,
    pub range: Option<DateRange>,
}

impl ExpenseQuery {
    /// Query with explicit categories and range
    pub fn new(categories: impl IntoIterator<Item = Category>, range: DateRange) -> Self {
        Self {
            categories: Some(categories.into_iter().collect()),
            range: Some(range),
        }
    }
}

/// Everything the expense table displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseListView {
    /// Matching records, newest date first
    pub rows: Vec<Expense>,
    pub summary: ExpenseSummary,
    /// Categories that can be picked (present in the store, first-seen order)
    pub available_categories: Vec<Category>,
    /// Categories actually applied
    pub selected_categories: BTreeSet<Category>,
    /// Date range actually applied; `None` when the store is empty
    pub range: Option<DateRange>,
}

impl ExpenseListView {
    /// Message to show in place of the table when the store is empty
    pub fn empty_message(&self) -> Option<&'static str> {
        self.range.is_none().then_some(NO_EXPENSES)
    }
}

impl ViewController {
    /// Resolve the query's defaults against the store
    ///
    /// Returns `None` when there are no expenses to bound the date range.
    pub fn resolve_filter(&self, query: &ExpenseQuery) -> Option<ExpenseFilter> {
        let store = self.store();
        let (min, max) = store.date_bounds()?;

        let categories = match &query.categories {
            Some(selected) => selected.clone(),
            None => store.categories_present().into_iter().collect(),
        };
        let range = match query.range {
            Some(range) => range,
            None => DateRange::new(min, max).ok()?,
        };

        Some(ExpenseFilter::new(categories, range))
    }

    /// Build the filtered expense table
    pub fn view_expenses(&self, query: &ExpenseQuery) -> ExpenseListView {
        let available_categories = self.store().categories_present();

        let Some(filter) = self.resolve_filter(query) else {
            return ExpenseListView {
                available_categories,
                ..ExpenseListView::default()
            };
        };

        let matching = self.store().filter(&filter);
        let summary = ExpenseSummary::of(&matching);

        let mut rows: Vec<Expense> = matching.into_iter().cloned().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        debug!(
            range = %filter.range(),
            categories = filter.categories().len(),
            rows = rows.len(),
            "expense view built"
        );

        ExpenseListView {
            rows,
            summary,
            available_categories,
            selected_categories: filter.categories().clone(),
            range: Some(filter.range()),
        }
    }

    /// Build a date range from user input
    pub fn date_range(
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> TrackerResult<DateRange> {
        match end {
            Some(end) => DateRange::new(start, end),
            None => Ok(DateRange::single(start)),
        }
    }
}
