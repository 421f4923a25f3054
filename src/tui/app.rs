//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Exactly one menu action is shown at a time: selecting another action
//! tears down whatever view or dialog was open.

use chrono::NaiveDate;

use crate::commands::{execute, Command, MenuAction, Outcome};
use crate::config::Settings;
use crate::models::Expense;
use crate::services::{BudgetReport, PendingExpense};
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::prompt::PromptState;

/// What the main panel shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Welcome,
    Expenses(Vec<Expense>),
    Budget(BudgetReport),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    AddExpense(ExpenseFormState),
    /// Waiting on yes/no; the form comes back afterwards
    Confirm {
        pending: PendingExpense,
        form: ExpenseFormState,
    },
    Prompt(PromptState),
}

/// Severity of the status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Date used for the entry form and the budget check
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Highlighted menu entry
    pub selected_menu_index: usize,

    /// The action currently on screen
    pub active_action: Option<MenuAction>,

    pub active_view: ActiveView,

    pub active_dialog: ActiveDialog,

    /// Scroll offset for the expense table
    pub scroll_offset: usize,

    /// Status message to display
    pub status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings, today: NaiveDate) -> Self {
        Self {
            storage,
            settings,
            today,
            should_quit: false,
            selected_menu_index: 0,
            active_action: None,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            scroll_offset: 0,
            status: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn toggle_help(&mut self) {
        if self.active_dialog == ActiveDialog::Help {
            self.close_dialog();
        } else if !self.has_dialog() {
            self.active_dialog = ActiveDialog::Help;
        }
    }

    pub fn move_menu_up(&mut self) {
        self.selected_menu_index = self.selected_menu_index.saturating_sub(1);
    }

    pub fn move_menu_down(&mut self) {
        if self.selected_menu_index + 1 < MenuAction::ALL.len() {
            self.selected_menu_index += 1;
        }
    }

    pub fn selected_menu_action(&self) -> MenuAction {
        MenuAction::ALL[self.selected_menu_index.min(MenuAction::ALL.len() - 1)]
    }

    /// Show `action`, replacing whatever was on screen
    pub fn select_action(&mut self, action: MenuAction) {
        self.active_view = ActiveView::Welcome;
        self.active_dialog = ActiveDialog::None;
        self.scroll_offset = 0;
        self.clear_status();

        if let Some(index) = MenuAction::ALL.iter().position(|a| *a == action) {
            self.selected_menu_index = index;
        }
        self.active_action = Some(action);
        tracing::debug!(action = action.label(), "menu action selected");

        match action {
            MenuAction::AddExpense => {
                self.active_dialog =
                    ActiveDialog::AddExpense(ExpenseFormState::new(self.settings, self.today));
            }
            MenuAction::ViewExpenses => self.run(Command::ViewExpenses),
            MenuAction::BudgetCheck => {
                self.active_dialog =
                    ActiveDialog::Prompt(PromptState::budget_limit(self.settings.budget_limit));
            }
            MenuAction::ExportCsv => {
                self.active_dialog = ActiveDialog::Prompt(PromptState::export_csv());
            }
            MenuAction::ImportCsv => {
                self.active_dialog = ActiveDialog::Prompt(PromptState::import_csv());
            }
        }
    }

    /// Execute a command and reflect its outcome on screen
    ///
    /// Failures land on the open form or prompt, or in the status bar when
    /// there is none.
    pub fn run(&mut self, command: Command) {
        match execute(self.storage, self.settings, command) {
            Ok(outcome) => self.apply(outcome),
            Err(e) => {
                tracing::error!(error = %e, "command failed");
                let message = e.to_string();
                match &mut self.active_dialog {
                    ActiveDialog::AddExpense(form) => form.set_error(message),
                    ActiveDialog::Prompt(prompt) => prompt.set_error(message),
                    _ => {
                        self.status = Some(StatusMessage {
                            text: message,
                            kind: StatusKind::Error,
                        })
                    }
                }
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        let notification = outcome.notification();

        match outcome {
            Outcome::Staged(pending) => {
                if let ActiveDialog::AddExpense(form) = std::mem::take(&mut self.active_dialog) {
                    self.active_dialog = ActiveDialog::Confirm { pending, form };
                }
            }
            Outcome::Saved(_) => {}
            Outcome::Cancelled => self.set_status("not saved", StatusKind::Info),
            Outcome::Expenses(expenses) => {
                self.active_view = ActiveView::Expenses(expenses);
            }
            Outcome::Budget(report) => {
                self.close_dialog();
                if report.exceeded() {
                    self.set_status("budget exceeded!", StatusKind::Warning);
                }
                self.active_view = ActiveView::Budget(report);
            }
            Outcome::Exported { .. } => self.close_dialog(),
            Outcome::Imported { .. } => {
                self.close_dialog();
                self.active_view = ActiveView::Welcome;
            }
        }

        if let Some(text) = notification {
            self.set_status(text, StatusKind::Info);
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let len = match &self.active_view {
            ActiveView::Expenses(expenses) => expenses.len(),
            ActiveView::Budget(report) => report.expenses.len(),
            ActiveView::Welcome => 0,
        };
        self.scroll_offset = (self.scroll_offset + rows).min(len.saturating_sub(1));
    }

    /// Pending expense shown by the confirmation dialog
    pub fn pending_expense(&self) -> Option<&PendingExpense> {
        match &self.active_dialog {
            ActiveDialog::Confirm { pending, .. } => Some(pending),
            _ => None,
        }
    }
}
