//! CSV CLI commands
//!
//! `export` writes the whole collection to a CSV file; `import` replaces
//! the whole collection with the contents of one.

use std::path::PathBuf;

use crate::commands::{execute, Command, Outcome};
use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Handle `expense export <file.csv>`
pub fn handle_export_command(
    storage: &mut Storage,
    settings: &Settings,
    output: PathBuf,
) -> ExpenseResult<()> {
    if let Outcome::Exported { path, count } =
        execute(storage, settings, Command::Export { path: output })?
    {
        println!("Exported {} expenses to {}", count, path.display());
    }
    Ok(())
}

/// Handle `expense import <file.csv>`
pub fn handle_import_command(
    storage: &mut Storage,
    settings: &Settings,
    input: PathBuf,
) -> ExpenseResult<()> {
    let previous = storage.expenses.count();

    if let Outcome::Imported { path, count } =
        execute(storage, settings, Command::Import { path: input })?
    {
        println!("Imported {} expenses from {}", count, path.display());
        if previous > 0 {
            println!("Replaced {} previously stored expenses.", previous);
        }
    }
    Ok(())
}
