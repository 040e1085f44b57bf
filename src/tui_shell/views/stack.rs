use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use crate::table;

use super::space::short_ts;
use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect, app: &App, space: &str, stack: &str) {
    let title = Line::from(vec![
        Span::styled(
            format!("{} Stack", stack),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(format!("in {}", space), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            app.documents
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

    // The schema gates everything: without it there is no table shape.
    let Some(schema) = &app.schema.value else {
        let msg = match &app.schema.error {
            Some(err) => Line::from(Span::styled(
                format!("schema unavailable: {}", err),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from("loading schema…"),
        };
        frame.render_widget(Paragraph::new(vec![msg]).wrap(Wrap { trim: false }), inner);
        return;
    };

    // A failed refetch over a previously loaded schema still gets an
    // indicator; the stale table keeps rendering beneath it.
    let mut inner = inner;
    if let Some(err) = &app.schema.error {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("schema refresh failed: {}", err),
                Style::default().fg(Color::Red),
            ))),
            parts[0],
        );
        inner = parts[1];
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(inner);

    // Documents table; its own fetch error never disturbs the schema panel.
    if let Some(err) = &app.documents.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )))
            .wrap(Wrap { trim: false }),
            cols[0],
        );
    } else {
        draw_documents(frame, cols[0], app, schema);
    }

    // Schema reference panel.
    let mut panel = vec![Line::from(Span::styled(
        "schema",
        Style::default().fg(Color::Gray),
    ))];
    for (name, ty) in schema {
        panel.push(Line::from(vec![
            Span::raw(format!("{:<14}", name)),
            Span::styled(ty.label(), Style::default().fg(Color::Cyan)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(panel)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::LEFT)),
        cols[1],
    );
}

fn draw_documents(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &App,
    schema: &crate::model::FieldSchema,
) {
    if app.documents.value.is_empty() {
        frame.render_widget(Paragraph::new(Line::from("(no documents)")), area);
        return;
    }

    let header = Row::new(
        table::header(schema)
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, Style::default().fg(Color::Yellow)))),
    )
    .height(1);

    let rows = table::document_rows(schema, &app.documents.value)
        .into_iter()
        .map(|r| {
            let mut cells = Vec::with_capacity(r.cells.len() + 1);
            cells.push(Cell::from(r.number.to_string()));
            cells.extend(r.cells.into_iter().map(Cell::from));
            Row::new(cells).height(1)
        });

    let mut widths = vec![Constraint::Length(10)];
    widths.extend(std::iter::repeat_n(
        Constraint::Min(8),
        schema.len(),
    ));

    let mut state = TableState::default();
    if app.focus == Focus::Main {
        state.select(Some(
            app.doc_selected
                .min(app.documents.value.len().saturating_sub(1)),
        ));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(table, area, &mut state);
}
