//! Reports module for the expense tracker
//!
//! Read-only projections over the expense table: spending broken down by
//! category and summary statistics for filtered views.

pub mod spending;
pub mod summary;

pub use spending::{CategoryBreakdown, SpendingByCategory};
pub use summary::ExpenseSummary;
