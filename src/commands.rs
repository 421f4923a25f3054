//! Command layer
//!
//! Every menu action maps to a [`Command`] executed against the application
//! state. The CLI and the TUI both go through [`execute`], so each action can
//! be exercised without any user interface.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv_file;
use crate::models::{Expense, ExpenseRecord, Money};
use crate::services::{
    all_expenses, import_expenses_csv, month_to_date, BudgetReport, ExpenseService, NewExpense,
    PendingExpense,
};
use crate::storage::Storage;

/// The five entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddExpense,
    ViewExpenses,
    BudgetCheck,
    ExportCsv,
    ImportCsv,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::AddExpense,
        MenuAction::ViewExpenses,
        MenuAction::BudgetCheck,
        MenuAction::ExportCsv,
        MenuAction::ImportCsv,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddExpense => "Add Expense",
            MenuAction::ViewExpenses => "View Expenses",
            MenuAction::BudgetCheck => "Budget Check",
            MenuAction::ExportCsv => "To CSV",
            MenuAction::ImportCsv => "From CSV",
        }
    }

    /// Number key selecting this action
    pub fn shortcut(&self) -> char {
        match self {
            MenuAction::AddExpense => '1',
            MenuAction::ViewExpenses => '2',
            MenuAction::BudgetCheck => '3',
            MenuAction::ExportCsv => '4',
            MenuAction::ImportCsv => '5',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.shortcut() == key)
    }
}

/// A discrete request against the expense collection
#[derive(Debug, Clone)]
pub enum Command {
    /// Validate form input and hold it for confirmation
    Stage { input: NewExpense, today: NaiveDate },
    /// The user said yes
    Confirm(PendingExpense),
    /// The user said no
    Cancel(PendingExpense),
    ViewExpenses,
    BudgetCheck { today: NaiveDate, limit: Money },
    Export { path: PathBuf },
    Import { path: PathBuf },
}

/// What a command produced
#[derive(Debug, Clone)]
pub enum Outcome {
    Staged(PendingExpense),
    Saved(ExpenseRecord),
    Cancelled,
    Expenses(Vec<Expense>),
    Budget(BudgetReport),
    Exported { path: PathBuf, count: usize },
    Imported { path: PathBuf, count: usize },
}

impl Outcome {
    /// Short message to pop up for the user, if the outcome warrants one
    pub fn notification(&self) -> Option<String> {
        match self {
            Outcome::Saved(_) => Some("expense saved".to_string()),
            Outcome::Exported { .. } => Some("saved to CSV file".to_string()),
            Outcome::Imported { path, .. } => {
                Some(format!("expenses loaded from {}", path.display()))
            }
            _ => None,
        }
    }
}

/// Run one command against the application state
pub fn execute(
    storage: &mut Storage,
    settings: &Settings,
    command: Command,
) -> ExpenseResult<Outcome> {
    match command {
        Command::Stage { input, today } => {
            let service = ExpenseService::new(storage, settings);
            service.stage(input, today).map(Outcome::Staged)
        }
        Command::Confirm(pending) => {
            let mut service = ExpenseService::new(storage, settings);
            service.confirm(pending).map(Outcome::Saved)
        }
        Command::Cancel(pending) => {
            ExpenseService::new(storage, settings).cancel(pending);
            Ok(Outcome::Cancelled)
        }
        Command::ViewExpenses => Ok(Outcome::Expenses(all_expenses(storage.expenses.get_all()))),
        Command::BudgetCheck { today, limit } => Ok(Outcome::Budget(month_to_date(
            storage.expenses.get_all(),
            today,
            limit,
        ))),
        Command::Export { path } => {
            ensure_csv_path(&path)?;
            let count = export_expenses_csv_file(storage.expenses.get_all(), &path)?;
            tracing::info!(path = %path.display(), count, "expenses exported");
            Ok(Outcome::Exported { path, count })
        }
        Command::Import { path } => {
            ensure_csv_path(&path)?;
            // Parse everything before touching the collection
            let records = import_expenses_csv(&path)?;
            let count = ExpenseService::new(storage, settings).replace_all(records)?;
            tracing::info!(path = %path.display(), count, "expenses imported");
            Ok(Outcome::Imported { path, count })
        }
    }
}

/// Parse a budget limit typed by the user; limits must not be negative
pub fn parse_budget_limit(raw: &str) -> ExpenseResult<Money> {
    let limit = Money::parse(raw)
        .map_err(|e| ExpenseError::Validation(format!("invalid budget limit: {}", e)))?;
    if limit.is_negative() {
        return Err(ExpenseError::Validation(
            "budget limit must not be negative".into(),
        ));
    }
    Ok(limit)
}

/// Only `*.csv` files are offered by the file chooser
pub fn ensure_csv_path(path: &Path) -> ExpenseResult<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Ok(())
    } else {
        Err(ExpenseError::Validation(format!(
            "{} is not a .csv file",
            path.display()
        )))
    }
}
