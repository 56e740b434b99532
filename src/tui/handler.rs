//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: dialogs first, then form editing, then page keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::Page;
use crate::export::ArtifactKind;

use super::app::{ActiveDialog, App, FocusedPanel, InputMode};
use super::dialogs;
use super::event::Event;
use super::views::add_expense::ExpenseField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => {
            handle_editing_key(app, key);
            Ok(())
        }
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Income => {
            dialogs::income::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Esc => {
            app.notifications.dismiss();
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.select_page(page);
            }
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_page_key(app, key),
    }

    Ok(())
}

/// Handle keys when the page menu is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_menu(true),
        KeyCode::Char('k') | KeyCode::Up => app.move_menu(false),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if let Some(page) = Page::from_index(app.menu_index) {
                app.select_page(page);
                app.focused_panel = FocusedPanel::Main;
            }
        }
        // Page actions still work from the menu
        _ => handle_page_key(app, key),
    }
}

/// Handle keys for the active page
fn handle_page_key(app: &mut App, key: KeyEvent) {
    match app.page() {
        Page::Dashboard => {
            if key.code == KeyCode::Char('i') {
                app.open_dialog(ActiveDialog::Income);
            }
        }
        Page::AddExpense => {
            if matches!(key.code, KeyCode::Char('a') | KeyCode::Enter) {
                app.focused_panel = FocusedPanel::Main;
                app.input_mode = InputMode::Editing;
            }
        }
        Page::ViewExpenses => handle_expense_list_key(app, key),
        Page::ExportData => match key.code {
            KeyCode::Char('c') => app.export(ArtifactKind::Csv),
            KeyCode::Char('p') => app.export(ArtifactKind::Pdf),
            _ => {}
        },
    }
}

fn handle_expense_list_key(app: &mut App, key: KeyEvent) {
    let available = app.controller.store().categories_present().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.filter.move_cursor(true, available),
        KeyCode::Char('k') | KeyCode::Up => app.filter.move_cursor(false, available),
        KeyCode::Char(' ') => app.toggle_filter_category(),
        KeyCode::Char('d') => {
            app.focused_panel = FocusedPanel::Main;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('r') => app.reset_filter(),
        KeyCode::Char('J') | KeyCode::PageDown => {
            let rows = app.controller.view_expenses(&app.filter.query()).rows.len();
            app.move_row(true, rows);
        }
        KeyCode::Char('K') | KeyCode::PageUp => app.move_row(false, 0),
        _ => {}
    }
}

/// Handle keys while a form on the page is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.input_mode = InputMode::Normal;
        return;
    }

    match app.page() {
        Page::AddExpense => handle_expense_form_key(app, key),
        Page::ViewExpenses => handle_range_key(app, key),
        _ => app.input_mode = InputMode::Normal,
    }
}

fn handle_expense_form_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.submit_expense();
        return;
    }

    let form = &mut app.expense_form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.cycle_category(false)
        }
        KeyCode::Right if form.focused_field == ExpenseField::Category => {
            form.cycle_category(true)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = form.focused_input() {
                input.clear();
            }
        }
        KeyCode::Char(c) => form.insert_char(c),
        _ => {
            if let Some(input) = form.focused_input() {
                edit_input(input, key.code);
            }
        }
    }
}

fn handle_range_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.apply_date_range();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.filter.switch_range_field()
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.filter.focused_input().insert(c),
        code => edit_input(app.filter.focused_input(), code),
    }
}

fn edit_input(input: &mut super::widgets::TextInput, code: KeyCode) {
    match code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::models::Category;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn test_app(dir: &TempDir) -> App {
        App::new(
            Settings::default(),
            TrackerPaths::with_base_dir(dir.path().to_path_buf()),
        )
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.page(), Page::ViewExpenses);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.page(), Page::Dashboard);
    }

    #[test]
    fn test_add_expense_by_keyboard() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // Replace the prefilled date
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2024-01-05");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "s");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Socks");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "7.99");
        press(&mut app, KeyCode::Enter);

        let store = app.controller.store();
        assert_eq!(store.len(), 1);
        assert_eq!(store.expenses()[0].category, Category::Shopping);
        assert_eq!(store.expenses()[0].description, "Socks");
        assert_eq!(store.total_expenses().cents(), 799);
    }

    #[test]
    fn test_income_dialog_by_keyboard() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.active_dialog, ActiveDialog::Income);

        type_text(&mut app, "4200");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.controller.store().monthly_income().cents(), 420000);
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "quiche");

        assert!(!app.should_quit);
        assert_eq!(app.expense_form.description.value(), "quiche");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }
}
