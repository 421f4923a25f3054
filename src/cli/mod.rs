//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the command layer.

pub mod csv;
pub mod expense;

pub use self::csv::{handle_export_command, handle_import_command};
pub use expense::{handle_add_command, handle_budget_command, handle_list_command, AddArgs};
