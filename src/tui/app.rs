//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the view controller, so the expense store lives exactly as long
//! as the session.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::error;

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::controller::{AddExpenseOutcome, IncomeUpdate, Page, ViewController};
use crate::export::ArtifactKind;

use super::dialogs::income::IncomeFormState;
use super::views::add_expense::ExpenseFormState;
use super::views::expenses::FilterState;
use super::widgets::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Income,
}

/// Main application state
pub struct App {
    /// Page dispatcher and owner of the expense store
    pub controller: ViewController,

    /// Application settings
    pub settings: Settings,

    /// Paths configuration
    pub paths: TrackerPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Highlighted entry in the page menu
    pub menu_index: usize,

    /// Add Expense form
    pub expense_form: ExpenseFormState,

    /// Income dialog
    pub income_form: IncomeFormState,

    /// View Expenses filters
    pub filter: FilterState,

    /// Selected row in the expense table
    pub selected_row: usize,

    /// Files written by the export page this session
    pub exported: Vec<PathBuf>,

    /// Toasts
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, paths: TrackerPaths) -> Self {
        let today = Self::today();
        Self {
            controller: ViewController::new(settings.recent_count),
            settings,
            paths,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            menu_index: 0,
            expense_form: ExpenseFormState::new(today),
            income_form: IncomeFormState::new(),
            filter: FilterState::new(),
            selected_row: 0,
            exported: Vec::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// The local calendar date
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The page being shown
    pub fn page(&self) -> Page {
        self.controller.page()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Switch to a different page
    pub fn select_page(&mut self, page: Page) {
        self.controller.select_page(page);
        self.menu_index = page.index();
        self.selected_row = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Move the menu highlight
    pub fn move_menu(&mut self, down: bool) {
        let last = Page::ALL.len() - 1;
        self.menu_index = if down {
            (self.menu_index + 1).min(last)
        } else {
            self.menu_index.saturating_sub(1)
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::Income {
            self.income_form
                .init(self.controller.store().monthly_income());
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Apply the income typed into the dialog
    pub fn submit_income(&mut self) {
        match self.controller.update_income(self.income_form.input.value()) {
            IncomeUpdate::Updated { message, .. } => {
                self.close_dialog();
                self.notify(Notification::success(message));
            }
            IncomeUpdate::Rejected(reason) => {
                self.income_form.error_message = Some(reason);
            }
        }
    }

    /// Submit the Add Expense form
    pub fn submit_expense(&mut self) {
        let outcome = self.controller.submit_expense(&self.expense_form.to_form());
        match outcome {
            AddExpenseOutcome::Added { message, .. } => {
                self.expense_form.clear_after_submit();
                self.filter.reset();
                self.notify(Notification::success(message));
            }
            AddExpenseOutcome::Rejected(reason) => {
                self.notify(Notification::error(reason));
            }
        }
    }

    /// Apply the typed date range to the expense filter
    pub fn apply_date_range(&mut self) {
        if let Err(e) = self.filter.apply_range() {
            self.notify(Notification::from_error(&e));
        }
        self.selected_row = 0;
    }

    /// Clear category and date choices in the expense filter
    pub fn reset_filter(&mut self) {
        self.filter.reset();
        self.selected_row = 0;
        self.notify(Notification::info("Filters cleared. Showing all expenses."));
    }

    /// Toggle the highlighted category in the expense filter
    pub fn toggle_filter_category(&mut self) {
        let available = self.controller.store().categories_present();
        self.filter.toggle_at_cursor(&available);
        self.selected_row = 0;
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> PathBuf {
        self.settings.resolved_export_dir(&self.paths)
    }

    /// Produce an export and save it to the export directory
    pub fn export(&mut self, kind: ArtifactKind) {
        let today = Self::today();
        let artifact = match kind {
            ArtifactKind::Csv => self.controller.export_csv(today),
            ArtifactKind::Pdf => self.controller.export_pdf(today),
        };

        let saved = artifact.and_then(|artifact| artifact.save_to(&self.export_dir()));
        match saved {
            Ok(path) => {
                self.notify(Notification::success(format!(
                    "Saved {}",
                    path.display()
                )));
                self.exported.push(path);
            }
            Err(e) => {
                if !e.is_empty_export() {
                    error!(error = %e, "export failed");
                }
                self.notify(Notification::from_error(&e));
            }
        }
    }

    /// Move the table selection
    pub fn move_row(&mut self, down: bool, rows: usize) {
        if down {
            if self.selected_row + 1 < rows {
                self.selected_row += 1;
            }
        } else {
            self.selected_row = self.selected_row.saturating_sub(1);
        }
    }
}
