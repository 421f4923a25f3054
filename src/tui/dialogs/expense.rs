//! Add Expense dialog
//!
//! Every field is picked from a bounded set: the date from the last few
//! days, the amount from a slider, the category from the configured list.
//! Only the description is free text. Enter stages the expense and opens
//! the confirmation dialog.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::commands::Command;
use crate::config::Settings;
use crate::models::{Money, DATE_FORMAT};
use crate::services::{date_options, NewExpense};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{hints, render_error, render_field};

/// Slider step for the amount field
const AMOUNT_STEP: Money = Money::from_cents(100);

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    /// Oldest first, today last
    pub dates: Vec<NaiveDate>,
    pub date_index: usize,
    pub amount: Money,
    pub amount_min: Money,
    pub amount_max: Money,
    pub categories: Vec<String>,
    pub category_index: usize,
    pub description: TextInput,
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// A fresh form: today's date, the smallest amount, the first category
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        let dates = date_options(today, settings.date_window_days);
        Self {
            focused_field: ExpenseField::Date,
            date_index: dates.len().saturating_sub(1),
            dates,
            amount: settings.amount_min,
            amount_min: settings.amount_min,
            amount_max: settings.amount_max,
            categories: settings.categories.clone(),
            category_index: 0,
            description: TextInput::new().placeholder("What was it for?"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.dates.get(self.date_index).copied()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.category_index).map(String::as_str)
    }

    /// Left/Right on the focused field
    pub fn adjust(&mut self, forward: bool) {
        match self.focused_field {
            ExpenseField::Date => {
                self.date_index = step_index(self.date_index, self.dates.len(), forward, false);
            }
            ExpenseField::Amount => {
                let moved = if forward {
                    self.amount + AMOUNT_STEP
                } else {
                    self.amount - AMOUNT_STEP
                };
                self.amount = moved.clamp(self.amount_min, self.amount_max);
            }
            ExpenseField::Category => {
                self.category_index =
                    step_index(self.category_index, self.categories.len(), forward, true);
            }
            ExpenseField::Description => {
                if forward {
                    self.description.move_right();
                } else {
                    self.description.move_left();
                }
            }
        }
    }

    /// The form's current values as entry input
    pub fn to_new_expense(&self) -> Option<NewExpense> {
        Some(NewExpense {
            date: self.selected_date()?,
            amount: self.amount,
            category: self.selected_category()?.to_string(),
            description: self.description.value().to_string(),
        })
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Dates stop at either end; categories wrap around
fn step_index(index: usize, len: usize, forward: bool, wrap: bool) -> usize {
    if len == 0 {
        return 0;
    }
    match (forward, wrap) {
        (true, true) => (index + 1) % len,
        (false, true) => (index + len - 1) % len,
        (true, false) => (index + 1).min(len - 1),
        (false, false) => index.saturating_sub(1),
    }
}

/// Render the expense form
pub fn render(frame: &mut Frame, form: &ExpenseFormState, currency_symbol: &str) {
    let area = centered_rect_fixed(64, 12, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Bounds
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = form.focused_field;

    let date = form
        .selected_date()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    render_field(
        frame,
        chunks[0],
        "Date",
        picker(date, focused == ExpenseField::Date),
        focused == ExpenseField::Date,
    );

    render_field(
        frame,
        chunks[1],
        "Amount",
        picker(
            form.amount.format_with_symbol(currency_symbol),
            focused == ExpenseField::Amount,
        ),
        focused == ExpenseField::Amount,
    );

    render_field(
        frame,
        chunks[2],
        "Category",
        picker(
            form.selected_category().unwrap_or_default().to_string(),
            focused == ExpenseField::Category,
        ),
        focused == ExpenseField::Category,
    );

    render_field(
        frame,
        chunks[3],
        "Description",
        form.description.spans(focused == ExpenseField::Description),
        focused == ExpenseField::Description,
    );

    let bounds = format!(
        "amount {} to {}, dates back to {}",
        form.amount_min.format_with_symbol(currency_symbol),
        form.amount_max.format_with_symbol(currency_symbol),
        form.dates
            .first()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    );
    frame.render_widget(
        ratatui::widgets::Paragraph::new(Span::styled(
            bounds,
            Style::default().fg(Color::DarkGray),
        )),
        chunks[5],
    );

    render_error(frame, chunks[6], form.error_message.as_deref());

    let hint_line = hints(&[
        ("[Tab]", "Next", Color::Yellow),
        ("[←/→]", "Change", Color::Yellow),
        ("[Enter]", "Save", Color::Green),
        ("[Esc]", "Close", Color::Red),
    ]);
    frame.render_widget(ratatui::widgets::Paragraph::new(hint_line), chunks[7]);
}

/// `◀ value ▶` when focused
fn picker(value: String, focused: bool) -> Vec<Span<'static>> {
    if focused {
        vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(value, Style::default().fg(Color::White)),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ]
    } else {
        vec![Span::styled(value, Style::default().fg(Color::Yellow))]
    }
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ActiveDialog::AddExpense(form) = &mut app.active_dialog else {
        return false;
    };
    let editing_description = form.focused_field == ExpenseField::Description;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left => form.adjust(false),
        KeyCode::Right => form.adjust(true),
        KeyCode::Enter => {
            form.clear_error();
            match form.to_new_expense() {
                Some(input) => {
                    let today = app.today;
                    app.run(Command::Stage { input, today });
                }
                None => form.set_error("no date or category to choose from"),
            }
        }
        KeyCode::Backspace if editing_description => form.description.backspace(),
        KeyCode::Delete if editing_description => form.description.delete(),
        KeyCode::Home if editing_description => form.description.move_start(),
        KeyCode::End if editing_description => form.description.move_end(),
        KeyCode::Char(c) if editing_description => form.description.insert(c),
        _ => return false,
    }

    true
}
