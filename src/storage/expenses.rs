//! In-memory expense store
//!
//! Holds the monthly income and the append-only list of expenses for one
//! running session. Nothing is written to disk; the data is gone when the
//! process exits.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::TrackerResult;
use crate::models::{Category, Expense, Money, NewExpense};

use super::filter::ExpenseFilter;

/// Total spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Sum of amounts in the category
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
}

/// Session state: monthly income plus the expense table
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    monthly_income: Money,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store with zero income
    pub fn new() -> Self {
        Self::default()
    }

    /// Current monthly income
    pub fn monthly_income(&self) -> Money {
        self.monthly_income
    }

    /// Replace the monthly income
    ///
    /// Callers are expected to have rejected negative values already.
    pub fn set_income(&mut self, value: Money) {
        debug_assert!(!value.is_negative(), "income must not be negative");
        debug!(income = %value, "monthly income replaced");
        self.monthly_income = value;
    }

    /// Validate and append a new expense, returning the stored record
    pub fn add_expense(&mut self, new: NewExpense) -> TrackerResult<Expense> {
        let expense = new.into_expense()?;
        self.expenses.push(expense.clone());
        debug!(count = self.expenses.len(), "expense appended");
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether any expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses; negative when overspent
    pub fn remaining_balance(&self) -> Money {
        self.monthly_income - self.total_expenses()
    }

    /// Spending grouped by category, in the order categories first appear
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(&self.expenses)
    }

    /// The `n` most recent expenses, newest date first
    ///
    /// Expenses sharing a date are ordered most-recently-added first.
    pub fn recent_transactions(&self, n: usize) -> Vec<&Expense> {
        let mut recent: Vec<&Expense> = self.expenses.iter().rev().collect();
        // Stable sort keeps the reversed insertion order within a date
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(n);
        recent
    }

    /// Expenses passing the filter, in insertion order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        filter.apply(&self.expenses)
    }

    /// Arithmetic mean of a subset's amounts; zero when the subset is empty
    pub fn average_amount(subset: &[&Expense]) -> Money {
        Money::mean(subset.iter().map(|e| e.amount).sum(), subset.len())
    }

    /// Categories that have at least one expense, in first-seen order
    pub fn categories_present(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category) {
                seen.push(expense.category);
            }
        }
        seen
    }

    /// Earliest and latest expense dates, if any expenses exist
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.expenses.iter().map(|e| e.date).min()?;
        let max = self.expenses.iter().map(|e| e.date).max()?;
        Some((min, max))
    }
}

/// Group any run of expenses by category, in first-seen order
pub fn category_totals<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::filter::DateRange;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(store: &mut ExpenseStore, d: NaiveDate, category: Category, desc: &str, cents: i64) {
        store
            .add_expense(NewExpense::new(d, category, desc, Money::from_cents(cents)))
            .unwrap();
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.monthly_income(), Money::zero());
        assert_eq!(store.total_expenses(), Money::zero());
        assert_eq!(store.remaining_balance(), Money::zero());
        assert!(store.category_totals().is_empty());
        assert!(store.date_bounds().is_none());
    }

    #[test]
    fn test_single_lunch_scenario() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 5), Category::Food, "Lunch", 1250);

        assert_eq!(store.total_expenses().cents(), 1250);
        assert_eq!(store.remaining_balance().cents(), -1250);

        let recent = store.recent_transactions(5);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].description, "Lunch");
    }

    #[test]
    fn test_add_appends_and_grows_total() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 5), Category::Food, "Lunch", 1250);
        let before_total = store.total_expenses();
        let before_len = store.len();

        let created = store
            .add_expense(NewExpense::new(
                date(2023, 12, 1),
                Category::Housing,
                "Rent",
                Money::from_cents(90000),
            ))
            .unwrap();

        assert_eq!(store.len(), before_len + 1);
        assert_eq!(store.expenses().last(), Some(&created));
        assert_eq!(store.total_expenses(), before_total + created.amount);
    }

    #[test]
    fn test_rejected_add_leaves_store_unchanged() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 5), Category::Food, "Lunch", 1250);

        let err = store
            .add_expense(NewExpense::new(
                date(2024, 1, 6),
                Category::Food,
                "",
                Money::from_cents(500),
            ))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_expenses().cents(), 1250);
    }

    #[test]
    fn test_totals_at_maximum_amount() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 5), Category::Housing, "House", Money::MAX_AMOUNT.cents());
        add(&mut store, date(2024, 1, 6), Category::Housing, "Another", Money::MAX_AMOUNT.cents());

        let oversized = store.add_expense(NewExpense::new(
            date(2024, 1, 7),
            Category::Other,
            "Too much",
            Money::parse("90000000000000000.00").unwrap(),
        ));
        assert!(oversized.unwrap_err().is_validation());

        assert_eq!(store.len(), 2);
        assert_eq!(store.total_expenses().cents(), 2 * Money::MAX_AMOUNT.cents());
        assert_eq!(store.remaining_balance().cents(), -2 * Money::MAX_AMOUNT.cents());
    }

    #[test]
    fn test_remaining_balance_tracks_income() {
        let mut store = ExpenseStore::new();
        store.set_income(Money::from_cents(300000));
        add(&mut store, date(2024, 1, 5), Category::Housing, "Rent", 150000);
        assert_eq!(store.remaining_balance().cents(), 150000);

        store.set_income(Money::from_cents(100000));
        assert_eq!(store.remaining_balance().cents(), -50000);
        assert_eq!(
            store.remaining_balance(),
            store.monthly_income() - store.total_expenses()
        );
    }

    #[test]
    fn test_category_totals_and_average() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 1), Category::Food, "Groceries", 1000);
        add(&mut store, date(2024, 1, 2), Category::Shopping, "Shoes", 3000);
        add(&mut store, date(2024, 1, 3), Category::Food, "Dinner", 2000);

        let totals = store.category_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, Category::Food);
        assert_eq!(totals[0].total.cents(), 3000);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].category, Category::Shopping);
        assert_eq!(totals[1].total.cents(), 3000);

        let summed: Money = totals.iter().map(|t| t.total).sum();
        assert_eq!(summed, store.total_expenses());

        let all: Vec<&Expense> = store.expenses().iter().collect();
        assert_eq!(ExpenseStore::average_amount(&all).cents(), 2000);
    }

    #[test]
    fn test_recent_orders_by_date_then_newest_added() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 10), Category::Food, "first", 100);
        add(&mut store, date(2024, 1, 12), Category::Food, "second", 100);
        add(&mut store, date(2024, 1, 10), Category::Food, "third", 100);
        add(&mut store, date(2024, 1, 1), Category::Food, "fourth", 100);

        let recent: Vec<&str> = store
            .recent_transactions(3)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(recent, vec!["second", "third", "first"]);
    }

    #[test]
    fn test_filter_excluding_everything_averages_zero() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 1, 1), Category::Food, "Groceries", 1000);
        add(&mut store, date(2024, 1, 2), Category::Shopping, "Shoes", 3000);

        let filter = ExpenseFilter::new(
            [Category::Healthcare],
            DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap(),
        );
        let subset = store.filter(&filter);
        assert!(subset.is_empty());
        assert_eq!(ExpenseStore::average_amount(&subset), Money::zero());
    }

    #[test]
    fn test_categories_present_and_bounds() {
        let mut store = ExpenseStore::new();
        add(&mut store, date(2024, 3, 1), Category::Utilities, "Power", 5000);
        add(&mut store, date(2024, 1, 15), Category::Food, "Lunch", 1200);
        add(&mut store, date(2024, 2, 1), Category::Utilities, "Water", 3000);

        assert_eq!(
            store.categories_present(),
            vec![Category::Utilities, Category::Food]
        );
        assert_eq!(
            store.date_bounds(),
            Some((date(2024, 1, 15), date(2024, 3, 1)))
        );
    }
}
