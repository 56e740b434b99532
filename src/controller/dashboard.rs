//! Dashboard page
//!
//! Income, totals, the spending chart and the latest transactions.

use tracing::{info, warn};

use super::ViewController;
use crate::models::{Expense, Money};
use crate::reports::CategoryBreakdown;

/// Shown instead of the recent list when nothing has been recorded
pub const NO_TRANSACTIONS: &str = "No transactions yet. Add some expenses to see them here!";

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub monthly_income: Money,
    pub total_expenses: Money,
    pub remaining_balance: Money,
    /// Spending exceeds income
    pub over_budget: bool,
    pub category_breakdown: CategoryBreakdown,
    /// Newest first
    pub recent: Vec<Expense>,
}

impl DashboardView {
    /// Message to show in place of an empty recent list
    pub fn empty_message(&self) -> Option<&'static str> {
        self.recent.is_empty().then_some(NO_TRANSACTIONS)
    }
}

/// Result of an income update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeUpdate {
    Updated { income: Money, message: String },
    Rejected(String),
}

impl ViewController {
    /// Build the dashboard view model
    pub fn dashboard(&self) -> DashboardView {
        let store = self.store();
        let remaining = store.remaining_balance();

        DashboardView {
            monthly_income: store.monthly_income(),
            total_expenses: store.total_expenses(),
            remaining_balance: remaining,
            over_budget: remaining.is_negative(),
            category_breakdown: CategoryBreakdown::generate(store.expenses()),
            recent: store
                .recent_transactions(self.recent_count())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Parse and apply a new monthly income
    pub fn update_income(&mut self, input: &str) -> IncomeUpdate {
        let income = match Money::parse(input) {
            Ok(income) => income,
            Err(e) => {
                warn!(input, error = %e, "income rejected");
                return IncomeUpdate::Rejected("Please enter a valid income amount.".into());
            }
        };

        if income.is_negative() {
            warn!(%income, "negative income rejected");
            return IncomeUpdate::Rejected("Monthly income cannot be negative.".into());
        }

        if income > Money::MAX_AMOUNT {
            warn!(%income, "oversized income rejected");
            return IncomeUpdate::Rejected(format!(
                "Monthly income cannot exceed {}.",
                Money::MAX_AMOUNT
            ));
        }

        self.store.set_income(income);
        info!(%income, "monthly income updated");

        IncomeUpdate::Updated {
            income,
            message: format!("Monthly income updated to {}", income),
        }
    }
}
