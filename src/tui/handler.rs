//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog first, then to the global
//! menu keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::commands::MenuAction;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() && handle_dialog_key(app, key) {
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Returns true when the open dialog consumed the key
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> bool {
    match &app.active_dialog {
        ActiveDialog::None => false,
        ActiveDialog::Help => {
            app.close_dialog();
            true
        }
        ActiveDialog::AddExpense(_) => dialogs::expense::handle_key(app, key),
        ActiveDialog::Confirm { .. } => {
            // Modal: only y/n/Esc do anything
            dialogs::confirm::handle_key(app, key);
            true
        }
        ActiveDialog::Prompt(_) => dialogs::prompt::handle_key(app, key),
    }
}

/// Handle menu keys
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(c) if MenuAction::from_shortcut(c).is_some() => {
            if let Some(action) = MenuAction::from_shortcut(c) {
                app.select_action(action);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_menu_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_menu_down(),
        KeyCode::Enter => {
            let action = app.selected_menu_action();
            app.select_action(action);
        }
        KeyCode::PageUp => app.scroll_up(PAGE_ROWS),
        KeyCode::PageDown => app.scroll_down(PAGE_ROWS),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::Settings;
    use crate::storage::Storage;
    use crate::tui::app::{ActiveView, StatusKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn status_text<'a>(app: &'a App<'_>) -> Option<&'a str> {
        app.status.as_ref().map(|s| s.text.as_str())
    }

    #[test]
    fn test_add_expense_confirm() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        assert!(matches!(app.active_dialog, ActiveDialog::AddExpense(_)));

        press(&mut app, KeyCode::Up);
        type_str(&mut app, "lunch");
        press(&mut app, KeyCode::Enter);

        let prompt = app.pending_expense().unwrap().prompt();
        assert_eq!(
            prompt,
            "Save {expense_date: 2024-02-10, amount: 1.00, category: Food, description: lunch} ?"
        );
        assert_eq!(app.storage.expenses.count(), 0);

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.storage.expenses.count(), 1);
        assert!(matches!(app.active_dialog, ActiveDialog::AddExpense(_)));
        assert_eq!(status_text(&app), Some("expense saved"));
    }

    #[test]
    fn test_add_expense_cancel_leaves_nothing_behind() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Up);
        type_str(&mut app, "tea");
        press(&mut app, KeyCode::Enter);
        assert!(app.pending_expense().is_some());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.storage.expenses.count(), 0);
        assert!(!app.storage.paths().expenses_file().exists());
        assert!(matches!(app.active_dialog, ActiveDialog::AddExpense(_)));
    }

    #[test]
    fn test_confirm_dialog_is_modal() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Up);
        type_str(&mut app, "tea");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('2'));

        assert!(!app.should_quit);
        assert!(app.pending_expense().is_some());
    }

    #[test]
    fn test_amount_slider_and_category_picker() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab); // Amount
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab); // Category
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab); // Description
        type_str(&mut app, "bus");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('y'));

        let saved = &app.storage.expenses.get_all()[0];
        assert_eq!(saved.amount.map(|a| a.cents()), Some(300));
        assert_eq!(saved.category.as_deref(), Some("Travel"));
        assert_eq!(saved.description.as_deref(), Some("bus"));
    }

    #[test]
    fn test_blank_description_keeps_form_open() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);

        assert!(app.pending_expense().is_none());
        match &app.active_dialog {
            ActiveDialog::AddExpense(form) => assert_eq!(
                form.error_message.as_deref(),
                Some("Validation error: description is required")
            ),
            other => panic!("expected the entry form, got {:?}", other),
        }
        assert_eq!(app.storage.expenses.count(), 0);
    }

    #[test]
    fn test_selecting_an_action_tears_down_the_previous_one() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        // Date field focused, so digits are menu keys
        press(&mut app, KeyCode::Char('2'));

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.active_view, ActiveView::Expenses(Vec::new()));
        assert_eq!(app.active_action, Some(MenuAction::ViewExpenses));
        assert_eq!(app.selected_menu_index, 1);
    }

    #[test]
    fn test_description_swallows_menu_keys() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::BackTab);
        type_str(&mut app, "q2?");

        assert!(!app.should_quit);
        match &app.active_dialog {
            ActiveDialog::AddExpense(form) => assert_eq!(form.description.value(), "q2?"),
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_budget_check_flow() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        for _ in 0..9 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "books");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('y'));

        press(&mut app, KeyCode::Char('3'));
        assert!(matches!(app.active_dialog, ActiveDialog::Prompt(_)));

        for _ in 0.."4000.00".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        match &app.active_view {
            ActiveView::Budget(report) => {
                assert_eq!(report.spent.cents(), 1_000);
                assert!(report.exceeded());
            }
            other => panic!("unexpected view: {:?}", other),
        }
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
    }

    #[test]
    fn test_invalid_limit_stays_in_prompt() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('3'));
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Enter);

        match &app.active_dialog {
            ActiveDialog::Prompt(prompt) => assert!(prompt.error_message.is_some()),
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_export_and_import_through_prompts() {
        let (temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Up);
        type_str(&mut app, "tea");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.storage.expenses.count(), 1);

        let csv_path = temp_dir.path().join("out.csv");
        let csv_path_str = csv_path.to_str().unwrap();

        press(&mut app, KeyCode::Char('4'));
        for _ in 0.."expenses.csv".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, csv_path_str);
        press(&mut app, KeyCode::Enter);

        assert!(csv_path.exists());
        assert_eq!(status_text(&app), Some("saved to CSV file"));

        std::fs::write(
            &csv_path,
            "expense_date,amount,category,description\n\
             2024-02-01,5,Toys,ball\n2024-02-02,6,Toys,kite\n",
        )
        .unwrap();

        press(&mut app, KeyCode::Char('5'));
        type_str(&mut app, csv_path_str);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.storage.expenses.count(), 2);
        let expected = format!("expenses loaded from {}", csv_path_str);
        assert_eq!(status_text(&app), Some(expected.as_str()));
    }

    #[test]
    fn test_failed_import_shows_error_in_prompt() {
        let (temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        let missing = temp_dir.path().join("missing.csv");
        press(&mut app, KeyCode::Char('5'));
        type_str(&mut app, missing.to_str().unwrap());
        press(&mut app, KeyCode::Enter);

        match &app.active_dialog {
            ActiveDialog::Prompt(prompt) => {
                assert!(prompt.error_message.as_deref().unwrap().contains("Import error"))
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_menu_navigation_and_quit() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings, today());

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_menu_index, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_menu_index, 4);
        assert_eq!(app.selected_menu_action(), MenuAction::ImportCsv);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.active_dialog, ActiveDialog::None);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
