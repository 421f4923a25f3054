//! Single-line prompt dialog
//!
//! Asks for the budget limit before a budget check, or for the CSV file
//! to write or read.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::commands::{parse_budget_limit, Command};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{hints, render_error, render_field};

/// Default file offered by the To CSV dialog
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// What the typed value is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    BudgetLimit,
    ExportCsv,
    ImportCsv,
}

impl PromptPurpose {
    fn title(&self) -> &'static str {
        match self {
            Self::BudgetLimit => " Budget Check ",
            Self::ExportCsv => " To CSV ",
            Self::ImportCsv => " From CSV ",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::BudgetLimit => "Limit",
            Self::ExportCsv => "Save as",
            Self::ImportCsv => "Load from",
        }
    }

    fn note(&self) -> &'static str {
        match self {
            Self::BudgetLimit => "Spending this month is compared against the limit.",
            Self::ExportCsv => "All stored expenses are written to the file.",
            Self::ImportCsv => "Replaces every stored expense with the file's rows.",
        }
    }
}

/// State for the prompt dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub purpose: PromptPurpose,
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl PromptState {
    fn with_input(purpose: PromptPurpose, input: TextInput) -> Self {
        Self {
            purpose,
            input,
            error_message: None,
        }
    }

    /// Budget limit prompt prefilled with `limit`
    pub fn budget_limit(limit: Money) -> Self {
        Self::with_input(
            PromptPurpose::BudgetLimit,
            TextInput::new().content(limit.to_decimal_string()),
        )
    }

    pub fn export_csv() -> Self {
        Self::with_input(
            PromptPurpose::ExportCsv,
            TextInput::new().content(DEFAULT_EXPORT_FILE),
        )
    }

    pub fn import_csv() -> Self {
        Self::with_input(
            PromptPurpose::ImportCsv,
            TextInput::new().placeholder("path/to/expenses.csv"),
        )
    }

    /// Turn the typed value into the command it asks for
    pub fn to_command(&self, today: chrono::NaiveDate) -> ExpenseResult<Command> {
        let value = self.input.value().trim();
        match self.purpose {
            PromptPurpose::BudgetLimit => Ok(Command::BudgetCheck {
                today,
                limit: parse_budget_limit(value)?,
            }),
            PromptPurpose::ExportCsv | PromptPurpose::ImportCsv if value.is_empty() => Err(
                ExpenseError::Validation("enter the path of a .csv file".into()),
            ),
            PromptPurpose::ExportCsv => Ok(Command::Export {
                path: PathBuf::from(value),
            }),
            PromptPurpose::ImportCsv => Ok(Command::Import {
                path: PathBuf::from(value),
            }),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the prompt dialog
pub fn render(frame: &mut Frame, state: &PromptState) {
    let area = centered_rect_fixed(64, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(state.purpose.title())
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
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            state.purpose.note(),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );

    render_field(
        frame,
        chunks[2],
        state.purpose.label(),
        state.input.spans(true),
        true,
    );

    render_error(frame, chunks[3], state.error_message.as_deref());

    let hint_line = hints(&[
        ("[Enter]", "OK", Color::Green),
        ("[Esc]", "Close", Color::Red),
    ]);
    frame.render_widget(Paragraph::new(hint_line), chunks[4]);
}

/// Handle key input for the prompt dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ActiveDialog::Prompt(state) = &mut app.active_dialog else {
        return false;
    };

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => match state.to_command(app.today) {
            Ok(command) => {
                app.run(command);
            }
            Err(e) => state.set_error(e.to_string()),
        },
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_start(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char(c) => state.input.insert(c),
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()
    }

    #[test]
    fn test_budget_limit_prefilled() {
        let state = PromptState::budget_limit(Money::from_dollars_cents(4000, 0));
        assert_eq!(state.input.value(), "4000.00");

        match state.to_command(today()).unwrap() {
            Command::BudgetCheck { today: day, limit } => {
                assert_eq!(day, today());
                assert_eq!(limit.cents(), 400_000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_limit() {
        let mut state = PromptState::budget_limit(Money::zero());
        state.input = TextInput::new().content("a lot");
        assert!(state.to_command(today()).unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_path_rejected() {
        let state = PromptState::import_csv();
        assert!(state.to_command(today()).is_err());
    }

    #[test]
    fn test_export_path() {
        let state = PromptState::export_csv();
        match state.to_command(today()).unwrap() {
            Command::Export { path } => assert_eq!(path, PathBuf::from(DEFAULT_EXPORT_FILE)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
