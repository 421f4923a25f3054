//! Expense CLI commands
//!
//! `add` stages the expense and asks for confirmation on stdin before
//! saving; `list` and `budget` print the derived views.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::commands::{execute, parse_budget_limit, Command, Outcome};
use crate::config::Settings;
use crate::display::{format_budget_report, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, DATE_FORMAT};
use crate::services::NewExpense;
use crate::storage::Storage;

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Amount (e.g., "12" or "12.50")
    #[arg(short, long)]
    pub amount: String,

    /// Category (one of the configured categories)
    #[arg(short, long)]
    pub category: String,

    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: String,

    /// Save without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle `expense add`
pub fn handle_add_command(
    storage: &mut Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let today = Local::now().date_naive();
    let input = parse_add_args(&args, today)?;

    let pending = match execute(storage, settings, Command::Stage { input, today })? {
        Outcome::Staged(pending) => pending,
        other => return Err(unexpected(other)),
    };

    let confirmed = args.yes || {
        let stdin = std::io::stdin();
        confirm(&mut stdin.lock(), &mut std::io::stdout(), &pending.prompt())?
    };

    if confirmed {
        execute(storage, settings, Command::Confirm(pending))?;
        println!("Expense saved.");
    } else {
        execute(storage, settings, Command::Cancel(pending))?;
        println!("Cancelled.");
    }

    Ok(())
}

/// Handle `expense list`
pub fn handle_list_command(storage: &mut Storage, settings: &Settings) -> ExpenseResult<()> {
    match execute(storage, settings, Command::ViewExpenses)? {
        Outcome::Expenses(expenses) => {
            print!("{}", format_expense_table(&expenses, &settings.currency_symbol));
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

/// Handle `expense budget`
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    limit: Option<String>,
) -> ExpenseResult<()> {
    let limit = match limit {
        Some(raw) => parse_budget_limit(&raw)?,
        None => settings.budget_limit,
    };
    let today = Local::now().date_naive();

    match execute(storage, settings, Command::BudgetCheck { today, limit })? {
        Outcome::Budget(report) => {
            print!("{}", format_budget_report(&report, &settings.currency_symbol));
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

/// Turn the raw `add` arguments into form input
pub fn parse_add_args(args: &AddArgs, today: NaiveDate) -> ExpenseResult<NewExpense> {
    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
            ExpenseError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", raw))
        })?,
        None => today,
    };

    let amount = Money::parse(&args.amount)
        .map_err(|e| ExpenseError::Validation(format!("invalid amount: {}", e)))?;

    Ok(NewExpense {
        date,
        amount,
        category: args.category.trim().to_string(),
        description: args.description.clone(),
    })
}

/// Print `prompt` and read a yes/no answer; anything but y/yes is a no
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> ExpenseResult<bool> {
    write!(writer, "{} (y/n): ", prompt)?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn unexpected(outcome: Outcome) -> ExpenseError {
    ExpenseError::Command(format!("unexpected outcome: {:?}", outcome))
}
