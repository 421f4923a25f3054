//! TUI Views module
//!
//! The main panel shows the expense list or the budget check; the sidebar
//! holds the menu and the status bar runs along the bottom.

pub mod budget;
pub mod expenses;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match &app.active_view {
        ActiveView::Welcome => render_welcome(frame, app, layout.main),
        ActiveView::Expenses(expenses) => expenses::render(frame, app, expenses, layout.main),
        ActiveView::Budget(report) => budget::render(frame, app, report, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    render_dialog(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddExpense(form) => {
            dialogs::expense::render(frame, form, &app.settings.currency_symbol)
        }
        ActiveDialog::Confirm { pending, .. } => dialogs::confirm::render(frame, &pending.prompt()),
        ActiveDialog::Prompt(state) => dialogs::prompt::render(frame, state),
    }
}

/// Main panel before any table has been asked for
fn render_welcome(frame: &mut Frame, app: &App, area: Rect) {
    let title = app
        .active_action
        .map(|action| format!(" {} ", action.label()))
        .unwrap_or_else(|| " Expense Tracker ".to_string());

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pick an action from the menu.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} expenses stored in {}",
                app.storage.expenses.count(),
                app.storage.expenses.path().display()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
