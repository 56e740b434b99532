//! Expense Tracker - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for a single-user expense
//! tracker: record a monthly income and a list of expenses, browse and filter
//! them, and export them as CSV or as a PDF report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `storage`: The in-memory expense store
//! - `reports`: Category breakdowns and summary statistics
//! - `display`: Text formatting for charts and percentages
//! - `export`: CSV and PDF generation
//! - `controller`: Page dispatch and the operations behind each page
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::controller::{ExpenseForm, ViewController};
//!
//! let mut controller = ViewController::default();
//! controller.update_income("3000");
//! controller.submit_expense(&ExpenseForm::new("2024-01-05", "Food", "Lunch", "12.50"));
//! let dashboard = controller.dashboard();
//! ```

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
