//! expense-cli - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the `expense` binary:
//! recording dated, categorized expenses behind a confirmation step,
//! listing them, checking month-to-date spending against a budget limit,
//! and moving the whole collection in and out of CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, money, months)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic and derived views
//! - `export`: CSV export
//! - `commands`: The five menu actions as executable commands
//! - `cli`: Command-line handlers
//! - `display`: Plain-text tables for the CLI
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
