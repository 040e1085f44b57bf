use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Queue",
        Style::default().fg(Color::Yellow),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from("Select a Space from the sidebar to browse its Stacks."),
        Line::from(""),
    ];
    match app.spaces.fetched_at.as_deref() {
        Some(_) => lines.push(Line::from(format!(
            "{} space(s) known.",
            app.spaces.value.len()
        ))),
        None => lines.push(Line::from(Span::styled(
            "Spaces not loaded yet.",
            Style::default().fg(Color::Gray),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
