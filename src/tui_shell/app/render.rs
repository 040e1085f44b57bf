use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::{modal, views};
use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Stackly", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled(
            app.client.base_url().to_string(),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Sidebar + main view
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[1]);
    views::draw_sidebar(frame, cols[0], app);
    views::draw_main(frame, cols[1], app);

    // Status: transient banner, else last log line.
    let status = match &app.banner {
        Some(b) => {
            let style = match b.severity {
                Severity::Info => Style::default().fg(Color::Green),
                Severity::Warning => Style::default().fg(Color::Yellow),
                Severity::Error => Style::default().fg(Color::Red),
                Severity::Critical => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(b.text.clone(), style))
        }
        None => Line::from(Span::styled(
            app.log.last().cloned().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
    };
    frame.render_widget(
        Paragraph::new(status).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    // Footer hints
    let hints = if app.nav.active_stack().is_some() {
        "b: back  r: refresh  l: log  n: add space  q: quit"
    } else if app.nav.active_space().is_some() {
        "Enter: open  a: add stack  Tab: focus  r: refresh  n: add space  q: quit"
    } else {
        "Up/Down + Enter: navigate  n: add space  l: log  q: quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ))),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        dim_frame(frame);
        match &m.kind {
            ModalKind::Log { scroll } => modal::draw_log_modal(frame, &app.log, *scroll),
            _ => modal::draw_modal(frame, m),
        }
    }
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
