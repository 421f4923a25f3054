//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: staging and confirming new
//! expenses, derived views, and CSV import.

pub mod expense;
pub mod import;
pub mod views;

pub use expense::{date_options, ExpenseService, NewExpense, PendingExpense};
pub use import::{import_expenses_csv, parse_expenses_csv};
pub use views::{all_expenses, month_to_date, BudgetReport};
