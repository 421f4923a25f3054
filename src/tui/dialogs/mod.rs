//! Dialog modules for the TUI
//!
//! Contains modal dialogs for entering expenses, confirming them, and
//! prompting for a budget limit or CSV path.

pub mod confirm;
pub mod expense;
pub mod help;
pub mod prompt;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one `label: value` form row
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Vec<Span<'static>>,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];
    spans.extend(value);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// A `[key] action` hint line
pub(crate) fn hints(pairs: &[(&'static str, &'static str, Color)]) -> Line<'static> {
    let spans = pairs
        .iter()
        .flat_map(|(key, action, color)| {
            [
                Span::styled(*key, Style::default().fg(*color)),
                Span::raw(format!(" {}  ", action)),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Red error line, or nothing
pub(crate) fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
