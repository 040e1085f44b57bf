use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::schema::DraftSchema;

use super::Input;

pub(super) struct Modal {
    pub(super) kind: ModalKind,
}

pub(super) enum ModalKind {
    SpaceForm(SpaceForm),
    StackForm(StackForm),
    Log { scroll: usize },
}

/// Inline add-Space affordance: one name input with per-keystroke feedback.
pub(super) struct SpaceForm {
    pub(super) input: Input,
    pub(super) error: Option<String>,
}

/// Add-Stack form: name input plus the dynamic schema-field editor.
/// `row` 0 is the name field; rows 1..=n address draft fields.
pub(super) struct StackForm {
    pub(super) space: String,
    pub(super) name: Input,
    pub(super) draft: DraftSchema,
    pub(super) row: usize,
    pub(super) name_error: Option<String>,
    pub(super) warning: Option<String>,
    pub(super) submit_error: Option<String>,
}

impl StackForm {
    pub(super) fn last_row(&self) -> usize {
        self.draft.fields().len()
    }

    /// Index into the draft for the focused row, when a field row is focused.
    pub(super) fn field_index(&self) -> Option<usize> {
        self.row.checked_sub(1)
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(30, 80);
    let h = area.height.saturating_sub(4).clamp(10, 26);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let title = match &modal.kind {
        ModalKind::SpaceForm(_) => "Add Space",
        ModalKind::StackForm(_) => "Add Stack",
        ModalKind::Log { .. } => "Log",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::SpaceForm(form) => draw_space_form(frame, form, inner),
        ModalKind::StackForm(form) => draw_stack_form(frame, form, inner),
        ModalKind::Log { .. } => {}
    }
}

pub(super) fn draw_log_modal(frame: &mut ratatui::Frame, lines: &[String], scroll: usize) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(30, 100);
    let h = area.height.saturating_sub(4).clamp(10, 30);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Log (Up/Down scroll; Esc close)");
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let text: Vec<Line> = if lines.is_empty() {
        vec![Line::from("(empty)")]
    } else {
        lines.iter().map(|l| Line::from(l.as_str())).collect()
    };
    let scroll = scroll.min(lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        inner,
    );
}

fn draw_space_form(frame: &mut ratatui::Frame, form: &SpaceForm, inner: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let mut lines = vec![
        Line::from("Name the new Space."),
        Line::from("Enter creates; Esc cancels."),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("name> ", Style::default().fg(Color::Yellow)),
            Span::raw(form.input.buf.as_str()),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Space name")),
        parts[1],
    );

    let x = 6 + form.input.buf[..form.input.cursor].chars().count() as u16;
    frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
}

fn draw_stack_form(frame: &mut ratatui::Frame, form: &StackForm, inner: Rect) {
    let name_row_y = 4 + if form.warning.is_some() { 2 } else { 0 };
    let mut lines = vec![
        Line::from(format!("New Stack in \"{}\".", form.space)),
        Line::from(
            "Up/Down: move  Tab: cycle type  Ctrl-A: add field  Ctrl-D: remove field",
        ),
        Line::from("Enter creates; Esc cancels."),
        Line::from(""),
    ];

    if let Some(w) = &form.warning {
        lines.push(Line::from(Span::styled(
            w.clone(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    // Name row.
    let name_style = if form.row == 0 {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::styled("name> ", Style::default().fg(Color::Yellow)),
        Span::styled(form.name.buf.clone(), name_style),
    ]));
    if let Some(err) = &form.name_error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "fields",
        Style::default().fg(Color::Gray),
    )));

    for (i, f) in form.draft.fields().iter().enumerate() {
        let focused = form.row == i + 1;
        let style = if focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let name = if f.name.is_empty() && focused {
            "_".to_string()
        } else {
            f.name.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", name), style),
            Span::raw(" : "),
            Span::styled(
                f.field_type.label(),
                style.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(err) = &form.submit_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    if form.row == 0 {
        let x = 6 + form.name.buf[..form.name.cursor].chars().count() as u16;
        frame.set_cursor_position((inner.x + x, inner.y + name_row_y as u16));
    }
}
