use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::grid::{self, TILES_PER_ROW};

use super::*;

const TILE_WIDTH: usize = 22;

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect, app: &App, space: &str) {
    let title = Line::from(vec![
        Span::styled(
            format!("{} Space", space),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            app.stacks
                .fetched_at
                .as_deref()
                .map(short_ts)
                .unwrap_or_default(),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(err) = &app.stacks.error {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    // Degraded name index changes validation behavior; call it out here
    // rather than in the generic banner.
    if let Some(err) = app.stack_names.fetch_failed() {
        lines.push(Line::from(Span::styled(
            format!("Name check unavailable ({}).", err),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    if app.stacks.value.is_empty() {
        lines.push(Line::from("(no stacks)"));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "a: + Add Stack",
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        return;
    }

    for (ri, row) in grid::chunk(&app.stacks.value, TILES_PER_ROW).iter().enumerate() {
        let band = if ri % 2 == 1 {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut spans = Vec::new();
        for (ci, tile) in row.iter().enumerate() {
            let idx = ri * TILES_PER_ROW + ci;
            let selected = app.focus == Focus::Main && idx == app.grid_selected;
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                band
            };
            spans.push(Span::styled(
                format!(" {:^width$} ", clip(&tile.stack_name), width = TILE_WIDTH),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn clip(name: &str) -> String {
    if name.chars().count() <= TILE_WIDTH {
        name.to_string()
    } else {
        let cut: String = name.chars().take(TILE_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

/// "HH:MMZ" from an RFC 3339 timestamp, for the view header.
pub(super) fn short_ts(ts: &str) -> String {
    ts.get(11..16)
        .map(|hm| format!("updated {}Z", hm))
        .unwrap_or_default()
}
