//! Add Expense page
//!
//! Raw form text in, an appended record or a rejection reason out.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::ViewController;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money, NewExpense};

/// Date format accepted by the form
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// The add-expense form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseForm {
    /// Build a form from its four fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Parse the fields into an expense draft
    pub fn parse(&self) -> TrackerResult<NewExpense> {
        let date = NaiveDate::parse_from_str(self.date.trim(), FORM_DATE_FORMAT).map_err(|_| {
            TrackerError::validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD.",
                self.date.trim()
            ))
        })?;

        let category: Category = self
            .category
            .parse()
            .map_err(|e| TrackerError::validation(format!("{}", e)))?;

        let amount = Money::parse(&self.amount)
            .map_err(|_| TrackerError::validation("Please enter a valid amount."))?;

        Ok(NewExpense::new(date, category, self.description.clone(), amount))
    }
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddExpenseOutcome {
    Added { expense: Expense, message: String },
    Rejected(String),
}

impl AddExpenseOutcome {
    /// Whether the expense was recorded
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// Message to show the user
    pub fn message(&self) -> &str {
        match self {
            Self::Added { message, .. } => message,
            Self::Rejected(reason) => reason,
        }
    }
}

impl ViewController {
    /// Validate the form and append the expense
    pub fn submit_expense(&mut self, form: &ExpenseForm) -> AddExpenseOutcome {
        let result = form
            .parse()
            .and_then(|draft| self.store.add_expense(draft));

        match result {
            Ok(expense) => {
                info!(
                    date = %expense.date,
                    category = %expense.category,
                    amount = %expense.amount,
                    "expense added"
                );
                let message = format!(
                    "Added expense of {} for {}",
                    expense.amount, expense.description
                );
                AddExpenseOutcome::Added { expense, message }
            }
            Err(e) => {
                warn!(error = %e, "expense rejected");
                AddExpenseOutcome::Rejected(e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_valid_expense() {
        let mut controller = ViewController::default();
        let outcome =
            controller.submit_expense(&ExpenseForm::new("2024-01-05", "food", "Lunch", "12.50"));

        assert!(outcome.is_added());
        assert_eq!(outcome.message(), "Added expense of $12.50 for Lunch");
        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.store().expenses()[0].category, Category::Food);
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let mut controller = ViewController::default();
        let outcome =
            controller.submit_expense(&ExpenseForm::new("2024-01-05", "Food", "   ", "12.50"));

        assert_eq!(
            outcome,
            AddExpenseOutcome::Rejected("Please enter a description for the expense.".into())
        );
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_amount_below_minimum_is_rejected() {
        let mut controller = ViewController::default();
        for amount in ["0", "0.001", "-5", "abc"] {
            let outcome =
                controller.submit_expense(&ExpenseForm::new("2024-01-05", "Food", "x", amount));
            assert!(!outcome.is_added(), "amount {:?} should be rejected", amount);
        }
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_bad_date_and_category_are_rejected() {
        let mut controller = ViewController::default();

        let outcome =
            controller.submit_expense(&ExpenseForm::new("05/01/2024", "Food", "Lunch", "1"));
        assert!(outcome.message().contains("YYYY-MM-DD"));

        let outcome =
            controller.submit_expense(&ExpenseForm::new("2024-01-05", "Groceries", "Milk", "1"));
        assert_eq!(outcome.message(), "Unknown category: Groceries");

        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut controller = ViewController::default();
        let form = ExpenseForm::new("2024-01-05", "Food", "Lunch", "12.50");
        controller.submit_expense(&form);
        controller.submit_expense(&form);

        assert_eq!(controller.store().len(), 2);
    }
}
