//! Expense service
//!
//! Adding an expense is a two-step affair: `stage` checks the input against
//! the entry form constraints and produces a [`PendingExpense`]; only
//! `confirm` touches the collection. `cancel` drops the pending value.

use chrono::{Duration, NaiveDate};

use crate::config::settings::MAX_DATE_WINDOW_DAYS;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money, DATE_FORMAT};
use crate::storage::Storage;

/// Input collected by the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

/// A validated expense waiting for the user's yes/no
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExpense {
    record: ExpenseRecord,
}

impl PendingExpense {
    pub fn record(&self) -> &ExpenseRecord {
        &self.record
    }

    /// Text shown in the confirmation dialog
    pub fn prompt(&self) -> String {
        format!("Save {} ?", self.record)
    }
}

/// The dates the entry form offers: `window_days` days back through today, ascending
///
/// The window is capped at [`MAX_DATE_WINDOW_DAYS`], and dates before the
/// calendar's lower bound are skipped.
pub fn date_options(today: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    (0..=window_days.min(MAX_DATE_WINDOW_DAYS) as i64)
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .collect()
}

/// Earliest date the entry form accepts
fn earliest_date(today: NaiveDate, window_days: u32) -> NaiveDate {
    date_options(today, window_days)
        .first()
        .copied()
        .unwrap_or(today)
}

/// Check `input` against the entry form constraints
pub fn validate_new_expense(
    input: &NewExpense,
    settings: &Settings,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let earliest = earliest_date(today, settings.date_window_days);
    if input.date < earliest || input.date > today {
        return Err(ExpenseError::Validation(format!(
            "date {} must be between {} and {}",
            input.date.format(DATE_FORMAT),
            earliest.format(DATE_FORMAT),
            today.format(DATE_FORMAT)
        )));
    }

    if input.amount < settings.amount_min || input.amount > settings.amount_max {
        return Err(ExpenseError::Validation(format!(
            "amount {} must be between {} and {}",
            input.amount.to_decimal_string(),
            settings.amount_min.to_decimal_string(),
            settings.amount_max.to_decimal_string()
        )));
    }

    if input.description.trim().is_empty() {
        return Err(ExpenseError::Validation("description is required".into()));
    }

    if !settings.has_category(&input.category) {
        return Err(ExpenseError::Validation(format!(
            "unknown category '{}' (expected one of: {})",
            input.category,
            settings.categories.join(", ")
        )));
    }

    Ok(())
}

/// Service for mutating the expense collection
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate the form input and hold it for confirmation; nothing is saved
    pub fn stage(&self, input: NewExpense, today: NaiveDate) -> ExpenseResult<PendingExpense> {
        validate_new_expense(&input, self.settings, today)?;

        let record = ExpenseRecord::new(input.date, input.amount, input.category, input.description);
        tracing::debug!(record = %record, "expense staged for confirmation");
        Ok(PendingExpense { record })
    }

    /// Append the pending expense and persist the collection
    pub fn confirm(&mut self, pending: PendingExpense) -> ExpenseResult<ExpenseRecord> {
        let record = pending.record;
        self.storage.expenses.append(record.clone())?;
        tracing::info!(
            record = %record,
            total = self.storage.expenses.count(),
            "expense saved"
        );
        Ok(record)
    }

    /// Discard the pending expense
    pub fn cancel(&self, pending: PendingExpense) {
        tracing::debug!(record = %pending.record, "expense discarded");
    }

    /// Replace the whole collection (CSV import) and persist it
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) -> ExpenseResult<usize> {
        let previous = self.storage.expenses.count();
        let count = records.len();
        self.storage.expenses.replace_all(records)?;
        tracing::info!(previous, count, "expense collection replaced");
        Ok(count)
    }
}
