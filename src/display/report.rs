//! Text formatting for spending charts

use crate::reports::{CategoryBreakdown, SpendingByCategory};

/// Width of the category label column in chart rows
pub const LABEL_WIDTH: usize = 15;

/// Format a percentage for display
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate text to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// One chart row: label, proportional bar, amount and share
pub fn format_chart_row(slice: &SpendingByCategory, max_cents: i64, bar_width: usize) -> String {
    format!(
        "{:<label$} {} {:>12} {:>5}",
        truncate(slice.label(), LABEL_WIDTH),
        format_bar(slice.total.cents() as f64, max_cents as f64, bar_width),
        slice.total,
        format_percentage(slice.percentage),
        label = LABEL_WIDTH
    )
}

/// All chart rows for a breakdown, bars scaled to the largest slice
pub fn format_chart(breakdown: &CategoryBreakdown, bar_width: usize) -> Vec<String> {
    let max = breakdown.max_total().cents();
    breakdown
        .slices
        .iter()
        .map(|slice| format_chart_row(slice, max, bar_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.26), "5.3%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Entertainment", 20), "Entertainment");
        assert_eq!(truncate("Entertainment", 8), "Enter...");
        assert_eq!(truncate("crème brûlée", 7), "crèm...");
        assert_eq!(truncate("abc", 2), "..");
    }

    #[test]
    fn test_chart_rows() {
        let expenses: Vec<Expense> = [(Category::Housing, 3000), (Category::Food, 1000)]
            .into_iter()
            .map(|(category, cents)| Expense {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                category,
                description: "x".into(),
                amount: Money::from_cents(cents),
            })
            .collect();

        let rows = format_chart(&CategoryBreakdown::generate(&expenses), 4);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Housing"));
        assert!(rows[0].contains("████"));
        assert!(rows[0].contains("$30.00"));
        assert!(rows[0].ends_with("75%"));
        assert!(rows[1].contains("█░░░"));
    }
}
