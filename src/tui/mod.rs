//! Terminal User Interface module
//!
//! This module provides the interactive TUI for the expense tracker using
//! ratatui: a page menu, one view per page, and dialogs for help and
//! income entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
