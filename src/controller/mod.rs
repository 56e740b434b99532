//! View controller
//!
//! Owns the expense store for the life of the session and exposes one set of
//! operations per page. Every operation either returns a view model for the
//! presentation layer or performs one mutation and returns a user-facing
//! message. Validation failures never touch the store.

pub mod add_expense;
pub mod dashboard;
pub mod export;
pub mod view_expenses;

use std::fmt;

use tracing::debug;

use crate::storage::ExpenseStore;

pub use add_expense::{AddExpenseOutcome, ExpenseForm};
pub use dashboard::{DashboardView, IncomeUpdate};
pub use export::ExportStatus;
pub use view_expenses::{ExpenseListView, ExpenseQuery};

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    AddExpense,
    ViewExpenses,
    ExportData,
}

impl Page {
    /// All pages in menu order
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::AddExpense,
        Page::ViewExpenses,
        Page::ExportData,
    ];

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::ExportData => "Export Data",
        }
    }

    /// Position in the menu
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Page for a menu position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

/// Page dispatcher and sole owner of the expense store
#[derive(Debug, Clone)]
pub struct ViewController {
    store: ExpenseStore,
    page: Page,
    recent_count: usize,
}

impl ViewController {
    /// Start a session with an empty store
    pub fn new(recent_count: usize) -> Self {
        Self {
            store: ExpenseStore::new(),
            page: Page::default(),
            recent_count,
        }
    }

    /// Read access to the store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// The selected page
    pub fn page(&self) -> Page {
        self.page
    }

    /// Select a page
    ///
    /// Selecting the same page again is a no-op. The store is never touched.
    pub fn select_page(&mut self, page: Page) {
        if self.page != page {
            debug!(from = %self.page, to = %page, "page selected");
            self.page = page;
        }
    }

    /// How many transactions the dashboard lists
    pub fn recent_count(&self) -> usize {
        self.recent_count
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(5)
    }
}
