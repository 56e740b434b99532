//! Spending breakdown
//!
//! Category totals with their share of overall spending, ready to be drawn
//! as a proportion chart keyed by category label.

use crate::models::{Category, Expense, Money};
use crate::storage::category_totals;

/// One slice of the spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    /// Category
    pub category: Category,
    /// Total spending in the category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of total spending (0-100)
    pub percentage: f64,
}

impl SpendingByCategory {
    /// Chart label
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Spending grouped by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    /// Slices in the order categories were first seen
    pub slices: Vec<SpendingByCategory>,
    /// Total across all slices
    pub total: Money,
}

impl CategoryBreakdown {
    /// Build a breakdown from any run of expenses
    pub fn generate<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let totals = category_totals(expenses);
        let total: Money = totals.iter().map(|t| t.total).sum();

        let slices = totals
            .into_iter()
            .map(|t| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (t.total.cents() as f64 / total.cents() as f64) * 100.0
                };
                SpendingByCategory {
                    category: t.category,
                    total: t.total,
                    count: t.count,
                    percentage,
                }
            })
            .collect();

        Self { slices, total }
    }

    /// Check whether there is anything to chart
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// (label, value) pairs for a chart renderer
    pub fn chart_pairs(&self) -> Vec<(&'static str, Money)> {
        self.slices.iter().map(|s| (s.label(), s.total)).collect()
    }

    /// Largest slice value, used to scale bars
    pub fn max_total(&self) -> Money {
        self.slices
            .iter()
            .map(|s| s.total)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: Category, cents: i64) -> Expense {
        Expense {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category,
            description: "item".into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_breakdown_percentages() {
        let expenses = vec![
            expense(Category::Food, 1000),
            expense(Category::Shopping, 3000),
            expense(Category::Food, 2000),
        ];

        let breakdown = CategoryBreakdown::generate(&expenses);
        assert_eq!(breakdown.total.cents(), 6000);
        assert_eq!(breakdown.slices.len(), 2);
        assert!((breakdown.slices[0].percentage - 50.0).abs() < f64::EPSILON);
        assert!((breakdown.slices[1].percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(
            breakdown.chart_pairs(),
            vec![
                ("Food", Money::from_cents(3000)),
                ("Shopping", Money::from_cents(3000))
            ]
        );
        assert_eq!(breakdown.max_total().cents(), 3000);
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = CategoryBreakdown::generate(&Vec::<Expense>::new());
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.max_total(), Money::zero());
    }
}
