use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add_command, handle_budget_command, handle_export_command, handle_import_command,
    handle_list_command, AddArgs,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::logging;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record dated, categorized expenses, list them, check this \
                  month's spending against a budget limit, and move the \
                  whole collection in and out of CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Add an expense (asks for confirmation)
    Add(AddArgs),

    /// List all recorded expenses
    #[command(alias = "ls")]
    List,

    /// Compare this month's spending against a budget limit
    Budget {
        /// Budget limit (defaults to the configured limit)
        #[arg(short, long, env = "EXPENSE_CLI_BUDGET_LIMIT")]
        limit: Option<String>,
    },

    /// Export all expenses to a CSV file
    Export {
        /// Output file path (*.csv)
        file: PathBuf,
    },

    /// Replace all expenses with the contents of a CSV file
    Import {
        /// Input file path (*.csv)
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;

    let launches_tui = matches!(cli.command, None | Some(Commands::Tui));
    if launches_tui {
        logging::init_file(&paths.log_file())?;
    } else {
        logging::init_stderr();
    }

    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
        tracing::info!(path = %paths.settings_file().display(), "default settings written");
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_cli::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&mut storage, &settings, args)?;
        }
        Some(Commands::List) => {
            handle_list_command(&mut storage, &settings)?;
        }
        Some(Commands::Budget { limit }) => {
            handle_budget_command(&mut storage, &settings, limit)?;
        }
        Some(Commands::Export { file }) => {
            handle_export_command(&mut storage, &settings, file)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut storage, &settings, file)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Budget limit:  {}",
                settings.format_money(settings.budget_limit)
            );
            println!(
                "  Amount range:  {} to {}",
                settings.format_money(settings.amount_min),
                settings.format_money(settings.amount_max)
            );
            println!("  Date window:   {} days", settings.date_window_days);
            println!("  Categories:    {}", settings.categories.join(", "));
        }
    }

    Ok(())
}
