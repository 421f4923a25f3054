//! Confirmation dialog
//!
//! The yes/no gate in front of every save. Nothing is written until the
//! user answers yes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::commands::Command;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;

use super::hints;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(60, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        hints(&[
            ("[Y]", "Confirm", Color::Green),
            ("[N]", "Cancel", Color::Red),
            ("[Esc]", "Cancel", Color::Yellow),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input for the confirmation dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let confirmed = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return false,
    };

    let ActiveDialog::Confirm { pending, form } = std::mem::take(&mut app.active_dialog) else {
        return false;
    };

    // Back to the form once answered, values kept
    app.active_dialog = ActiveDialog::AddExpense(form);

    if confirmed {
        app.run(Command::Confirm(pending));
    } else {
        app.run(Command::Cancel(pending));
    }
    true
}
