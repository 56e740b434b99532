//! Expense model
//!
//! A single dated, categorized and described spending entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Free-form description (never empty)
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,
}

/// The fields needed to record a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

impl NewExpense {
    /// Create a new expense draft
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> TrackerResult<()> {
        if self.description.trim().is_empty() {
            return Err(TrackerError::validation(
                "Please enter a description for the expense.",
            ));
        }

        if self.amount < Money::MIN_EXPENSE {
            return Err(TrackerError::validation(format!(
                "Amount must be at least {}",
                Money::MIN_EXPENSE
            )));
        }

        if self.amount > Money::MAX_AMOUNT {
            return Err(TrackerError::validation(format!(
                "Amount cannot exceed {}",
                Money::MAX_AMOUNT
            )));
        }

        Ok(())
    }

    /// Validate and turn the draft into a record
    pub fn into_expense(self) -> TrackerResult<Expense> {
        self.validate()?;
        Ok(Expense {
            date: self.date,
            category: self.category,
            description: self.description.trim().to_string(),
            amount: self.amount,
        })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_draft() {
        let expense = NewExpense::new(
            date(2024, 1, 5),
            Category::Food,
            "  Lunch ",
            Money::from_cents(1250),
        )
        .into_expense()
        .unwrap();

        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount.cents(), 1250);
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = NewExpense::new(date(2024, 1, 5), Category::Food, "   ", Money::from_cents(100))
            .into_expense()
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.user_message(),
            "Please enter a description for the expense."
        );
    }

    #[test]
    fn test_amount_below_minimum_rejected() {
        let zero = NewExpense::new(date(2024, 1, 5), Category::Food, "Gum", Money::zero());
        assert!(zero.validate().unwrap_err().is_validation());

        let negative =
            NewExpense::new(date(2024, 1, 5), Category::Food, "Refund", Money::from_cents(-100));
        assert!(negative.validate().is_err());

        let minimum =
            NewExpense::new(date(2024, 1, 5), Category::Food, "Candy", Money::from_cents(1));
        assert!(minimum.validate().is_ok());
    }

    #[test]
    fn test_amount_above_maximum_rejected() {
        let at_max = NewExpense::new(date(2024, 1, 5), Category::Housing, "House", Money::MAX_AMOUNT);
        assert!(at_max.validate().is_ok());

        let huge = NewExpense::new(
            date(2024, 1, 5),
            Category::Housing,
            "Island",
            Money::parse("90000000000000000.00").unwrap(),
        );
        let err = huge.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Amount cannot exceed $100,000,000,000.00");
    }
}
