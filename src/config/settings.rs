//! User settings for the expense tracker
//!
//! Holds the budget limit default and the constraints applied by the
//! expense entry form (date window, amount bounds, category set).

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Money;
use crate::storage::write_json_atomic;

/// Widest date window the entry form will offer
pub const MAX_DATE_WINDOW_DAYS: u32 = 366;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly budget limit offered by the budget check
    #[serde(default = "default_budget_limit")]
    pub budget_limit: Money,

    /// How many days back (before today) the entry form offers
    #[serde(default = "default_date_window_days")]
    pub date_window_days: u32,

    /// Smallest amount the entry form accepts
    #[serde(default = "default_amount_min")]
    pub amount_min: Money,

    /// Largest amount the entry form accepts
    #[serde(default = "default_amount_max")]
    pub amount_max: Money,

    /// The fixed set of categories offered by the entry form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_budget_limit() -> Money {
    Money::from_dollars_cents(4_000, 0)
}

fn default_date_window_days() -> u32 {
    10
}

fn default_amount_min() -> Money {
    Money::from_dollars_cents(1, 0)
}

fn default_amount_max() -> Money {
    Money::from_dollars_cents(400, 0)
}

fn default_categories() -> Vec<String> {
    ["Food", "Travel", "School", "Toys", "Family"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_limit: default_budget_limit(),
            date_window_days: default_date_window_days(),
            amount_min: default_amount_min(),
            amount_max: default_amount_max(),
            categories: default_categories(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject settings the entry form could not work with
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.date_window_days > MAX_DATE_WINDOW_DAYS {
            return Err(ExpenseError::Config(format!(
                "date_window_days ({}) must be at most {}",
                self.date_window_days, MAX_DATE_WINDOW_DAYS
            )));
        }
        if self.amount_min.is_negative() {
            return Err(ExpenseError::Config("amount_min must not be negative".into()));
        }
        if self.amount_min > self.amount_max {
            return Err(ExpenseError::Config(format!(
                "amount_min ({}) is greater than amount_max ({})",
                self.amount_min, self.amount_max
            )));
        }
        if self.categories.iter().all(|c| c.trim().is_empty()) {
            return Err(ExpenseError::Config("at least one category is required".into()));
        }
        Ok(())
    }

    /// Whether `category` belongs to the configured set (exact match)
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
