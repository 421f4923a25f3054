//! Expense display formatting
//!
//! Renders expense lists and the budget check as plain-text tables.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, DATE_FORMAT};
use crate::services::BudgetReport;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense, currency_symbol: &str) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            amount: expense.amount.format_with_symbol(currency_symbol),
            category: expense.category.clone(),
            description: expense.description.clone(),
        }
    }
}

/// Format a list of expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses
        .iter()
        .map(|expense| ExpenseRow::from_expense(expense, currency_symbol));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format the month-to-date budget check: summary line, then the month's expenses
pub fn format_budget_report(report: &BudgetReport, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget check for {}\n", report.period));
    output.push_str(&report.summary());
    output.push('\n');
    if report.exceeded() {
        output.push_str("Budget exceeded!\n");
    }
    output.push('\n');
    output.push_str(&format_expense_table(&report.expenses, currency_symbol));

    output
}
