//! Budget check view
//!
//! Month-to-date summary line over the month's expenses

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::BudgetReport;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

use super::expenses::render_table;

/// Render the budget check
pub fn render(frame: &mut Frame, app: &App, report: &BudgetReport, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_summary(frame, report, layout.header);

    let title = format!(" Expenses in {} ", report.period);
    render_table(frame, app, &report.expenses, &title, layout.content);
}

fn render_summary(frame: &mut Frame, report: &BudgetReport, area: Rect) {
    let (color, label) = if report.exceeded() {
        (Color::Red, "Over budget")
    } else {
        (Color::Green, "Within budget")
    };

    let block = Block::default()
        .title(format!(" Budget Check: {} ", report.period))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let line = Line::from(vec![
        Span::styled(
            report.summary(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", label), Style::default().fg(color)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
