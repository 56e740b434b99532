//! CSV export and re-import of the expense table
//!
//! The header is always `Date,Category,Description,Amount`, followed by one
//! row per expense in store order. Income is not part of the CSV.

use std::io::{Read, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money, NewExpense};

/// Column headers, in order
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// One CSV line
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: Category,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for CsvRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date,
            category: expense.category,
            description: expense.description.clone(),
            amount: expense.amount.to_decimal_string(),
        }
    }
}

/// Write expenses as CSV to any writer
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        csv_writer.serialize(CsvRow::from(expense))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Render expenses as CSV text
pub fn to_csv(expenses: &[Expense]) -> TrackerResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(expenses, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TrackerError::Export(e.to_string()))
}

/// Parse CSV produced by [`to_csv`] back into expense records
pub fn read_expenses_csv<R: Read>(reader: R) -> TrackerResult<Vec<Expense>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(TrackerError::Export(format!(
            "Unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut expenses = Vec::new();
    for (line, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let amount = Money::parse(&row.amount).map_err(|e| {
            TrackerError::validation(format!("Row {}: {}", line + 1, e))
        })?;
        let expense = NewExpense::new(row.date, row.category, row.description, amount)
            .into_expense()?;
        expenses.push(expense);
    }

    Ok(expenses)
}

/// Parse CSV text back into expense records
pub fn read_csv(text: &str) -> TrackerResult<Vec<Expense>> {
    read_expenses_csv(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(y: i32, m: u32, d: u32, category: Category, desc: &str, cents: i64) -> Expense {
        Expense {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            description: desc.to_string(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let expenses = vec![
            expense(2024, 1, 5, Category::Food, "Lunch", 1250),
            expense(2024, 1, 6, Category::Housing, "Rent", 120000),
        ];

        let csv = to_csv(&expenses).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Category,Description,Amount");
        assert_eq!(lines[1], "2024-01-05,Food,Lunch,12.50");
        assert_eq!(lines[2], "2024-01-06,Housing,Rent,1200.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Date,Category,Description,Amount");
    }

    #[test]
    fn test_escaping() {
        let expenses = vec![expense(
            2024,
            2,
            1,
            Category::Entertainment,
            "Movie, \"Dune\" and popcorn",
            2399,
        )];

        let csv = to_csv(&expenses).unwrap();
        assert!(csv.contains("\"Movie, \"\"Dune\"\" and popcorn\""));
    }

    #[test]
    fn test_round_trip() {
        let expenses = vec![
            expense(2024, 1, 5, Category::Food, "Lunch", 1250),
            expense(2024, 3, 9, Category::Shopping, "Shirt, blue", 2999),
            expense(2023, 12, 31, Category::Other, "Quote \" inside", 1),
            expense(2024, 7, 4, Category::Utilities, "Multi\nline", 123456),
        ];

        let csv = to_csv(&expenses).unwrap();
        let parsed = read_csv(&csv).unwrap();
        assert_eq!(parsed, expenses);
    }

    #[test]
    fn test_rejects_foreign_header() {
        let err = read_expenses_csv("When,What,Why,HowMuch\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TrackerError::Export(_)));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let text = "Date,Category,Description,Amount\n2024-01-01,Groceries,Milk,3.00\n";
        assert!(read_expenses_csv(text.as_bytes()).is_err());
    }
}
