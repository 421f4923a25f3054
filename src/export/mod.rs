//! Export module
//!
//! CSV is the one interchange format: every record, spreadsheet-compatible.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_csv_file};
