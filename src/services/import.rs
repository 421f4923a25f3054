//! CSV Import service
//!
//! Reads an expense CSV (header row required) into records. The result
//! replaces the whole collection; there is no merge and no duplicate check.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money, DATE_FORMAT};

/// Positions of the known columns in the header row
#[derive(Debug, Clone, Default)]
struct ColumnMapping {
    expense_date: Option<usize>,
    amount: Option<usize>,
    category: Option<usize>,
    description: Option<usize>,
    /// (index, name) of every other column
    extra: Vec<(usize, String)>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut mapping = Self::default();
        for (index, name) in headers.iter().enumerate() {
            let name = name.trim();
            match name {
                "expense_date" => mapping.expense_date = Some(index),
                "amount" => mapping.amount = Some(index),
                "category" => mapping.category = Some(index),
                "description" => mapping.description = Some(index),
                "" => {}
                other => mapping.extra.push((index, other.to_string())),
            }
        }
        mapping
    }

    fn has_any_known_column(&self) -> bool {
        self.expense_date.is_some()
            || self.amount.is_some()
            || self.category.is_some()
            || self.description.is_some()
    }
}

/// Parse expense records from CSV data
///
/// Cell values are taken as written. An empty cell leaves its field missing,
/// so a record exported with a missing field comes back without it. A date
/// that is not `YYYY-MM-DD` or an amount that is not a number fails the whole
/// parse.
pub fn parse_expenses_csv<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mapping = ColumnMapping::from_headers(&headers);
    if !mapping.has_any_known_column() {
        return Err(ExpenseError::Import(
            "no expense_date, amount, category or description column found".into(),
        ));
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(|e| ExpenseError::import_row(row_number, e))?;
        records.push(parse_row(&row, &mapping, row_number)?);
    }

    tracing::debug!(count = records.len(), "parsed expense CSV");
    Ok(records)
}

/// Read and parse an expense CSV file
pub fn import_expenses_csv(path: &Path) -> ExpenseResult<Vec<ExpenseRecord>> {
    let file = File::open(path).map_err(|e| {
        ExpenseError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    parse_expenses_csv(file)
}

fn parse_row(
    row: &StringRecord,
    mapping: &ColumnMapping,
    row_number: usize,
) -> ExpenseResult<ExpenseRecord> {
    let non_empty = |column: Option<usize>| {
        column
            .and_then(|i| row.get(i))
            .filter(|value| !value.is_empty())
    };

    let expense_date = non_empty(mapping.expense_date)
        .map(|value| {
            NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
                ExpenseError::import_row(
                    row_number,
                    format!("invalid expense_date '{}', expected YYYY-MM-DD", value),
                )
            })
        })
        .transpose()?;

    let amount = non_empty(mapping.amount)
        .map(|value| {
            Money::parse(value).map_err(|_| {
                ExpenseError::import_row(row_number, format!("invalid amount '{}'", value))
            })
        })
        .transpose()?;

    let category = non_empty(mapping.category).map(str::to_string);
    let description = non_empty(mapping.description).map(str::to_string);

    let extra: BTreeMap<String, String> = mapping
        .extra
        .iter()
        .filter_map(|(i, name)| {
            row.get(*i)
                .filter(|value| !value.is_empty())
                .map(|value| (name.clone(), value.to_string()))
        })
        .collect();

    Ok(ExpenseRecord {
        expense_date,
        amount,
        category,
        description,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let csv_data = "expense_date,amount,category,description\n2024-01-01,10,Food,lunch\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let expense = records[0].to_expense().unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(expense.amount.cents(), 1000);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv_data = "description,category,amount,expense_date\nbus,Travel,2.5,2024-02-03\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        let expense = records[0].to_expense().unwrap();
        assert_eq!(expense.amount.cents(), 250);
        assert_eq!(expense.description, "bus");
    }

    #[test]
    fn test_extra_columns_kept() {
        let csv_data = "expense_date,amount,category,description,payment,note\n\
                        2024-01-01,10.00,Food,lunch,card,\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(records[0].extra.get("payment").map(String::as_str), Some("card"));
        assert!(!records[0].extra.contains_key("note"));
    }

    #[test]
    fn test_missing_category_column_leaves_field_missing() {
        let csv_data = "expense_date,amount,description\n2024-01-01,10,lunch\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(records[0].missing_fields(), vec!["category"]);
    }

    #[test]
    fn test_empty_cells_leave_fields_missing() {
        let csv_data = "expense_date,amount,category,description\n2024-01-01,,Food,\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(records[0].amount, None);
        assert_eq!(records[0].description, None);
        assert_eq!(records[0].missing_fields(), vec!["amount", "description"]);
        assert!(!records[0].is_well_formed());
    }

    #[test]
    fn test_cell_values_are_not_trimmed() {
        let csv_data = "expense_date,amount,category,description\n\
                        2024-01-01,10, Food , lunch \n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(records[0].category.as_deref(), Some(" Food "));
        assert_eq!(records[0].description.as_deref(), Some(" lunch "));
    }

    #[test]
    fn test_padded_date_rejected() {
        let csv_data = "expense_date,amount,category,description\n 2024-01-01,10,Food,lunch\n";
        let err = parse_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.is_import());
    }

    #[test]
    fn test_quoted_fields() {
        let csv_data = "expense_date,amount,category,description\n\
                        2024-01-01,10,Food,\"pizza, salad and \"\"soda\"\"\"\n";
        let records = parse_expenses_csv(csv_data.as_bytes()).unwrap();

        assert_eq!(
            records[0].description.as_deref(),
            Some("pizza, salad and \"soda\"")
        );
    }

    #[test]
    fn test_bad_date_reports_row() {
        let csv_data = "expense_date,amount,category,description\n\
                        2024-01-01,10,Food,lunch\n\
                        01/02/2024,10,Food,lunch\n";
        let err = parse_expenses_csv(csv_data.as_bytes()).unwrap_err();

        assert!(err.is_import());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_bad_amount_rejected() {
        let csv_data = "expense_date,amount,category,description\n2024-01-01,ten,Food,lunch\n";
        assert!(parse_expenses_csv(csv_data.as_bytes()).is_err());
    }

    #[test]
    fn test_unrelated_csv_rejected() {
        let csv_data = "ID,Date,Payee\n1,2024-01-01,Store\n";
        let err = parse_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.is_import());
    }

    #[test]
    fn test_header_only_gives_empty_collection() {
        let csv_data = "expense_date,amount,category,description\n";
        assert!(parse_expenses_csv(csv_data.as_bytes()).unwrap().is_empty());
    }
}
