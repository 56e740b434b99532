//! Expense filtering
//!
//! A filter is a category set plus an inclusive date range. It works on any
//! slice of expenses, so filtering an already-filtered result with the same
//! filter returns the same records.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense};

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting a start that falls after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> TrackerResult<Self> {
        if start > end {
            return Err(TrackerError::validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within the range (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// Selects expenses by category membership and date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    categories: BTreeSet<Category>,
    range: DateRange,
}

impl ExpenseFilter {
    /// Create a filter from a category set and a date range
    pub fn new(categories: impl IntoIterator<Item = Category>, range: DateRange) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            range,
        }
    }

    /// The categories that pass the filter
    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// The date range that passes the filter
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Check whether a single expense passes
    pub fn matches(&self, expense: &Expense) -> bool {
        self.categories.contains(&expense.category) && self.range.contains(expense.date)
    }

    /// Keep the matching expenses, preserving their order
    pub fn apply<'a, I>(&self, expenses: I) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        expenses.into_iter().filter(|e| self.matches(e)).collect()
    }
}
