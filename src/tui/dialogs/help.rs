//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::commands::MenuAction;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![section("Menu"), Line::from("")];

    for action in MenuAction::ALL {
        lines.push(key_line(&action.shortcut().to_string(), action.label()));
    }
    lines.push(key_line("j/k ↑/↓", "Move menu selection"));
    lines.push(key_line("Enter", "Open selected action"));
    lines.push(key_line("PgUp/PgDn", "Scroll the expense table"));
    lines.push(key_line("q", "Quit"));
    lines.push(key_line("?", "Show/hide help"));

    lines.push(Line::from(""));
    lines.push(section("Add Expense"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/↓", "Next field"));
    lines.push(key_line("Shift+Tab/↑", "Previous field"));
    lines.push(key_line("←/→", "Change date, amount or category"));
    lines.push(key_line("Enter", "Save (asks for confirmation)"));
    lines.push(key_line("y / n", "Confirm / cancel the save"));
    lines.push(key_line("Esc", "Close the dialog"));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
