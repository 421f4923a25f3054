//! CSV Export functionality
//!
//! Dumps every record in the collection, complete or not. The header is the
//! four expense columns followed by any extra keys found on the records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, DATE_FORMAT, REQUIRED_FIELDS};

/// Write all records to CSV, returning how many rows were written
pub fn export_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    writer: W,
) -> ExpenseResult<usize> {
    let extra_columns = extra_columns(records);

    let mut csv_writer = csv::Writer::from_writer(writer);

    let header = REQUIRED_FIELDS
        .iter()
        .copied()
        .chain(extra_columns.iter().map(String::as_str));
    csv_writer.write_record(header).map_err(export_error)?;

    for record in records {
        let mut row = vec![
            record
                .expense_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            record
                .amount
                .map(|a| a.to_decimal_string())
                .unwrap_or_default(),
            record.category.clone().unwrap_or_default(),
            record.description.clone().unwrap_or_default(),
        ];
        row.extend(
            extra_columns
                .iter()
                .map(|key| record.extra.get(key).cloned().unwrap_or_default()),
        );
        csv_writer.write_record(&row).map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(records.len())
}

/// Create (or truncate) `path` and export all records into it
pub fn export_expenses_csv_file(records: &[ExpenseRecord], path: &Path) -> ExpenseResult<usize> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    export_expenses_csv(records, std::io::BufWriter::new(file))
}

/// Extra keys across all records, in first-seen order
fn extra_columns(records: &[ExpenseRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for key in records.iter().flat_map(|r| r.extra.keys()) {
        if !REQUIRED_FIELDS.contains(&key.as_str()) && !columns.contains(key) {
            columns.push(key.clone());
        }
    }
    columns
}

fn export_error(err: csv::Error) -> ExpenseError {
    ExpenseError::Export(err.to_string())
}
