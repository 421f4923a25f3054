//! Tracing setup
//!
//! CLI commands log to stderr. The terminal UI owns the screen, so while it
//! runs log lines go to `expense.log` in the base directory instead.
//! `RUST_LOG` overrides the default `expense_cli=info` filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::error::{ExpenseError, ExpenseResult};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "expense_cli=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber used by CLI commands
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        // A subscriber may already be set (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Install a subscriber appending to `log_file`, for use while the TUI runs
pub fn init_file(log_file: &Path) -> ExpenseResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to open log file {}: {}",
                log_file.display(),
                e
            ))
        })?;

    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    Ok(())
}
