//! Terminal User Interface module
//!
//! This module provides the interactive menu for the expense tracker using
//! ratatui: a sidebar with the five actions, a main panel for the expense
//! tables, and modal dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
