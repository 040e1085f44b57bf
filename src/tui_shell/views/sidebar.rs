use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .title(Span::styled(
            "Spaces",
            Style::default().fg(Color::Yellow),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Min(0),
            ratatui::layout::Constraint::Length(2),
        ])
        .split(inner);

    let mut items = Vec::with_capacity(app.spaces.value.len() + 1);
    items.push(entry("Queue", app.nav.is_queue()));
    for s in &app.spaces.value {
        let active = app.nav.active_space() == Some(s.space_name.as_str());
        items.push(entry(&s.space_name, active));
    }

    let mut state = ListState::default();
    if app.focus == Focus::Sidebar {
        state.select(Some(app.sidebar_selected.min(items.len().saturating_sub(1))));
    }

    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[0], &mut state);

    // Footer: the add-Space affordance, or the list's own fetch error.
    let footer = match &app.spaces.error {
        Some(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "n: + Add Space",
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )),
    };
    frame.render_widget(
        Paragraph::new(footer).block(Block::default().borders(Borders::TOP)),
        parts[1],
    );
}

/// The active marker is derived from navigation state alone.
fn entry(name: &str, active: bool) -> ListItem<'static> {
    if active {
        ListItem::new(Line::from(Span::styled(
            format!("▸ {}", name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
    } else {
        ListItem::new(Line::from(format!("  {}", name)))
    }
}
