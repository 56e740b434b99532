//! Storage layer for the expense tracker
//!
//! Session state lives in memory only: an [`ExpenseStore`] owned by the
//! view controller, plus the filter types used to query it.

pub mod expenses;
pub mod filter;

pub use expenses::{category_totals, CategoryTotal, ExpenseStore};
pub use filter::{DateRange, ExpenseFilter};
