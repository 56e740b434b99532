//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! money amounts, categories and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, NewExpense};
pub use money::{format_currency, Money, MoneyParseError};
