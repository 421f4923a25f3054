//! Core data models for the expense tracker
//!
//! Expense records, the money type and the monthly budget period.

pub mod expense;
pub mod money;
pub mod period;

pub use expense::{Expense, ExpenseRecord, DATE_FORMAT, REQUIRED_FIELDS};
pub use money::{Money, MoneyParseError};
pub use period::BudgetPeriod;
