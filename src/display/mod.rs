//! Display formatting for terminal output
//!
//! Text helpers shared by the TUI views: proportion bars, percentages, dates
//! and width-limited labels.

pub mod date;
pub mod report;

pub use date::format_date;
pub use report::{format_bar, format_chart, format_percentage, truncate};
