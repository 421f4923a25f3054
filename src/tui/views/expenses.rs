//! Expense list view
//!
//! Table of well-formed expenses in the order they were added

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Expense, DATE_FORMAT};
use crate::tui::app::App;

/// Render the View Expenses panel
pub fn render(frame: &mut Frame, app: &App, expenses: &[Expense], area: Rect) {
    let title = format!(" Expenses ({}) ", expenses.len());
    render_table(frame, app, expenses, &title, area);
}

/// Render `expenses` as a bordered table, honoring the app's scroll offset
pub fn render_table(frame: &mut Frame, app: &App, expenses: &[Expense], title: &str, area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses recorded.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(12), // Amount
        Constraint::Length(10), // Category
        Constraint::Min(10),    // Description
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .bottom_margin(1);

    let currency = &app.settings.currency_symbol;
    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.date.format(DATE_FORMAT).to_string()),
                Cell::from(format!("{:>10}", expense.amount.format_with_symbol(currency))),
                Cell::from(expense.category.clone()),
                Cell::from(expense.description.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    let mut state = TableState::default().with_offset(app.scroll_offset);
    frame.render_stateful_widget(table, area, &mut state);
}
