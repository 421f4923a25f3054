//! Expense record models
//!
//! `ExpenseRecord` is the stored shape: every required field is optional so
//! that incomplete rows (typically from a CSV import) survive load and save
//! untouched. `Expense` is the well-formed projection used by every view.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Date format used on disk, in CSV files, and in the entry form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The four fields a record needs before it shows up in any view
pub const REQUIRED_FIELDS: [&str; 4] = ["expense_date", "amount", "category", "description"];

/// A stored expense, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ad hoc columns carried over from an imported CSV file
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ExpenseRecord {
    /// Create a complete record
    pub fn new(
        expense_date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            expense_date: Some(expense_date),
            amount: Some(amount),
            category: Some(category.into()),
            description: Some(description.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Names of the required fields this record lacks
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.expense_date.is_some(),
            self.amount.is_some(),
            self.category.is_some(),
            self.description.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_well_formed(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The well-formed projection, or the list of missing fields
    pub fn to_expense(&self) -> Result<Expense, Vec<&'static str>> {
        match (
            self.expense_date,
            self.amount,
            self.category.as_ref(),
            self.description.as_ref(),
        ) {
            (Some(date), Some(amount), Some(category), Some(description)) => Ok(Expense {
                date,
                amount,
                category: category.clone(),
                description: description.clone(),
            }),
            _ => Err(self.missing_fields()),
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(REQUIRED_FIELDS.len() + self.extra.len());
        if let Some(date) = self.expense_date {
            parts.push(format!("expense_date: {}", date.format(DATE_FORMAT)));
        }
        if let Some(amount) = self.amount {
            parts.push(format!("amount: {}", amount.to_decimal_string()));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category: {}", category));
        }
        if let Some(description) = &self.description {
            parts.push(format!("description: {}", description));
        }
        for (key, value) in &self.extra {
            parts.push(format!("{}: {}", key, value));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// A well-formed expense, as shown in views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

impl From<Expense> for ExpenseRecord {
    fn from(expense: Expense) -> Self {
        ExpenseRecord::new(
            expense.date,
            expense.amount,
            expense.category,
            expense.description,
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{expense_date: {}, amount: {}, category: {}, description: {}}}",
            self.date.format(DATE_FORMAT),
            self.amount.to_decimal_string(),
            self.category,
            self.description
        )
    }
}
