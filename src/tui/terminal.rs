//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(storage: &mut Storage, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_loop(&mut terminal, storage, settings);

    // Restore even when the loop failed
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, storage: &mut Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings, Local::now().date_naive());
    let events = EventHandler::default();

    tracing::info!(expenses = app.storage.expenses.count(), "terminal UI started");

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        match events.next()? {
            Event::Tick => {
                // Keep "today" right across midnight
                app.today = Local::now().date_naive();
            }
            event => handle_event(&mut app, event)?,
        }
    }

    tracing::info!("terminal UI closed");
    Ok(())
}
