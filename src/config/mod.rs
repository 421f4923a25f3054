//! Configuration module for the expense tracker
//!
//! - XDG-compliant path resolution
//! - User settings persistence (budget limit, entry form constraints)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
