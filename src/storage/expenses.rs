//! Expense repository for JSON storage
//!
//! Holds the expense collection in append order and rewrites
//! expenses.json in full after every mutation.

use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

/// Repository owning the in-memory expense collection
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<ExpenseRecord>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the collection from disk (empty if the file is absent)
    pub fn load(&mut self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        self.expenses = file_data.expenses;
        tracing::debug!(count = self.expenses.len(), "loaded expenses");
        Ok(())
    }

    /// Rewrite the whole file from the in-memory collection
    pub fn save(&self) -> Result<(), ExpenseError> {
        let file_data = ExpenseData {
            expenses: self.expenses.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All records in append order, including incomplete ones
    pub fn get_all(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    /// Append one record and persist
    ///
    /// If the write fails the record is removed again so memory and disk agree.
    pub fn append(&mut self, record: ExpenseRecord) -> Result<(), ExpenseError> {
        self.expenses.push(record);
        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the whole collection and persist
    ///
    /// On a failed write the previous collection is restored.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) -> Result<(), ExpenseError> {
        let previous = std::mem::replace(&mut self.expenses, records);
        if let Err(e) = self.save() {
            self.expenses = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn record(day: u32, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            Money::from_cents(cents),
            "Food",
            format!("day {}", day),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count(), 0);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_append_persists_immediately() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(record(15, 5000)).unwrap();
        assert_eq!(repo.count(), 1);

        let mut reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all(), repo.get_all());
    }

    #[test]
    fn test_append_order_preserved() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(record(20, 100)).unwrap();
        repo.append(record(5, 200)).unwrap();
        repo.append(record(12, 300)).unwrap();

        let mut reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        let amounts: Vec<_> = reloaded
            .get_all()
            .iter()
            .filter_map(|r| r.amount)
            .map(|a| a.cents())
            .collect();
        assert_eq!(amounts, vec![100, 200, 300]);
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.append(record(1, 100)).unwrap();
        repo.append(record(2, 200)).unwrap();

        repo.replace_all(vec![record(3, 300)]).unwrap();
        assert_eq!(repo.count(), 1);

        let mut reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all(), &[record(3, 300)]);
    }

    #[test]
    fn test_incomplete_record_kept_on_disk() {
        let (_temp_dir, mut repo) = create_test_repo();
        let mut incomplete = record(1, 100);
        incomplete.category = None;
        repo.append(incomplete.clone()).unwrap();

        let mut reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all(), &[incomplete]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = temp_dir.path().join("expenses.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let mut repo = ExpenseRepository::new(path);
        assert!(repo.append(record(1, 100)).is_err());
        assert_eq!(repo.count(), 0);
    }
}
