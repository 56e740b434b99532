//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (title, page menu)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// Page menu
    pub menu: Rect,
    /// Balance summary under the menu
    pub summary: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(6), // Menu
                Constraint::Min(5),    // Summary
            ])
            .split(area);

        Self {
            header: chunks[0],
            menu: chunks[1],
            summary: chunks[2],
        }
    }
}

/// Layout for the dashboard page
pub struct DashboardLayout {
    /// Income / expenses / balance metrics
    pub metrics: [Rect; 3],
    /// Spending by category chart
    pub chart: Rect,
    /// Recent transactions table
    pub recent: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Metrics
                Constraint::Percentage(50), // Chart
                Constraint::Min(5),         // Recent
            ])
            .split(area);

        let metrics = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        Self {
            metrics: [metrics[0], metrics[1], metrics[2]],
            chart: rows[1],
            recent: rows[2],
        }
    }
}

/// Layout for the expense list page
pub struct ExpenseListLayout {
    /// Category and date filters
    pub filters: Rect,
    /// Expense table
    pub table: Rect,
    /// Total / count / average
    pub summary: Rect,
}

impl ExpenseListLayout {
    /// Calculate expense list layout
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Filters
                Constraint::Min(40),    // Table + summary
            ])
            .split(area);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Table
                Constraint::Length(3), // Summary
            ])
            .split(columns[1]);

        Self {
            filters: columns[0],
            table: right[0],
            summary: right[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Rect in the top-right corner for toasts
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.sidebar.width, 24);
        assert_eq!(layout.main.width, 76);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_fixed_rects_fit_small_screens() {
        let screen = Rect::new(0, 0, 20, 5);
        let dialog = centered_rect_fixed(50, 10, screen);
        assert_eq!((dialog.width, dialog.height), (20, 5));

        let toast = toast_rect(40, 4, Rect::new(0, 0, 100, 30));
        assert_eq!((toast.x, toast.y, toast.width), (60, 0, 40));
    }
}
