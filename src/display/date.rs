//! Date formatting for table cells

use std::fmt::Write;

use chrono::NaiveDate;

/// Format used when a configured format cannot render a date
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render `date` with a strftime `format`, falling back to `YYYY-MM-DD`
/// when the format contains an unknown specifier
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_date(date(), "%d/%m/%Y"), "09/03/2024");
        assert_eq!(format_date(date(), "%b %e"), "Mar  9");
    }

    #[test]
    fn test_bad_format_falls_back() {
        assert_eq!(format_date(date(), "%Q"), "2024-03-09");
    }
}
