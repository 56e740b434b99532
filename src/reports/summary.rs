//! Summary statistics over a set of expenses

use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;

/// Total, count and average of a set of expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpenseSummary {
    pub total: Money,
    pub count: usize,
    pub average: Money,
}

impl ExpenseSummary {
    /// Summarize a subset of expenses
    pub fn of(subset: &[&Expense]) -> Self {
        Self {
            total: subset.iter().map(|e| e.amount).sum(),
            count: subset.len(),
            average: ExpenseStore::average_amount(subset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_summary() {
        let expenses: Vec<Expense> = [1000, 2000, 3000]
            .iter()
            .map(|cents| Expense {
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                category: Category::Other,
                description: "thing".into(),
                amount: Money::from_cents(*cents),
            })
            .collect();
        let subset: Vec<&Expense> = expenses.iter().collect();

        let summary = ExpenseSummary::of(&subset);
        assert_eq!(summary.total.cents(), 6000);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average.cents(), 2000);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ExpenseSummary::of(&[]), ExpenseSummary::default());
    }
}
