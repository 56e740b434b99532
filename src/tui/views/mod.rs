//! TUI Views module
//!
//! One view per page (dashboard, add expense, expense list, export) plus
//! the sidebar and status bar.

pub mod add_expense;
pub mod dashboard;
pub mod expenses;
pub mod export;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use crate::controller::Page;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.page() {
        Page::Dashboard => dashboard::render(frame, app, layout.main),
        Page::AddExpense => add_expense::render(frame, app, layout.main),
        Page::ViewExpenses => expenses::render(frame, app, layout.main),
        Page::ExportData => export::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Income => dialogs::income::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(48, 5, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
