//! Derived views over the expense collection
//!
//! Views only ever see well-formed records. Incomplete records are logged
//! and skipped here; they stay in storage.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{BudgetPeriod, Expense, ExpenseRecord, Money};

/// Month-to-date spending measured against a limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub period: BudgetPeriod,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub expenses: Vec<Expense>,
}

impl BudgetReport {
    pub fn exceeded(&self) -> bool {
        self.spent > self.limit
    }

    /// One-line summary, e.g. "3950.00 left for the month (spent 50.00 out of 4000.00)"
    pub fn summary(&self) -> String {
        format!(
            "{} left for the month (spent {} out of {})",
            self.remaining.to_decimal_string(),
            self.spent.to_decimal_string(),
            self.limit.to_decimal_string()
        )
    }
}

/// Well-formed records in append order
pub fn all_expenses(records: &[ExpenseRecord]) -> Vec<Expense> {
    well_formed(records).collect()
}

/// Well-formed records dated inside `period`
fn expenses_in_period(records: &[ExpenseRecord], period: BudgetPeriod) -> Vec<Expense> {
    well_formed(records)
        .filter(|expense| period.contains(expense.date))
        .collect()
}

/// Spending for the month containing `today`, compared to `limit`
///
/// Going over the limit is reported with a warning and nothing else.
pub fn month_to_date(records: &[ExpenseRecord], today: NaiveDate, limit: Money) -> BudgetReport {
    let period = BudgetPeriod::containing(today);
    let expenses = expenses_in_period(records, period);
    let spent: Money = expenses.iter().map(|e| e.amount).sum();

    let report = BudgetReport {
        period,
        limit,
        spent,
        remaining: limit - spent,
        expenses,
    };

    if report.exceeded() {
        tracing::warn!(
            period = %report.period,
            spent = %report.spent,
            limit = %report.limit,
            "budget exceeded!"
        );
    }

    report
}

fn well_formed(records: &[ExpenseRecord]) -> impl Iterator<Item = Expense> + '_ {
    records.iter().filter_map(|record| match record.to_expense() {
        Ok(expense) => Some(expense),
        Err(missing) => {
            tracing::warn!(
                missing = ?missing,
                record = %record,
                "ignoring an expense record with missing fields"
            );
            None
        }
    })
}
