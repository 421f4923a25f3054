//! Display formatting for terminal output
//!
//! Tables and summaries printed by the CLI commands.

pub mod expense;

pub use expense::{format_budget_report, format_expense_table};
