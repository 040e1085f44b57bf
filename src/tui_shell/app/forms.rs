//! Add-Space and add-Stack authoring flows. Name feedback is recomputed on
//! every keystroke; submission is gated on the blank and duplicate checks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FieldSchema;
use crate::schema::DraftSchema;
use crate::sync::Uniqueness;
use crate::validate;

use super::*;
use super::super::{SpaceForm, StackForm};

enum Outcome {
    None,
    Close,
    CreateSpace(String),
    CreateStack {
        name: String,
        space: String,
        schema: FieldSchema,
    },
}

impl App {
    pub(super) fn open_space_form(&mut self) {
        self.modal = Some(Modal {
            kind: ModalKind::SpaceForm(SpaceForm {
                input: Input::default(),
                error: None,
            }),
        });
    }

    pub(super) fn open_stack_form(&mut self) {
        let Some(space) = self.nav.active_space().map(str::to_string) else {
            return;
        };
        let warning = self.stack_names.fetch_failed().map(|err| {
            format!(
                "Name check unavailable ({}); duplicates cannot be verified.",
                err
            )
        });
        self.modal = Some(Modal {
            kind: ModalKind::StackForm(StackForm {
                space,
                name: Input::default(),
                draft: DraftSchema::new(),
                row: 0,
                name_error: None,
                warning,
                submit_error: None,
            }),
        });
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let outcome = match &mut app.modal {
        None => return,
        Some(Modal {
            kind: ModalKind::Log { scroll },
        }) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Outcome::Close,
            KeyCode::Up => {
                *scroll = scroll.saturating_sub(1);
                Outcome::None
            }
            KeyCode::Down => {
                *scroll = scroll.saturating_add(1).min(app.log.len().saturating_sub(1));
                Outcome::None
            }
            _ => Outcome::None,
        },

        Some(Modal {
            kind: ModalKind::SpaceForm(form),
        }) => match key.code {
            KeyCode::Esc => Outcome::Close,
            KeyCode::Enter => {
                let name = form.input.buf.trim().to_string();
                if name.is_empty() {
                    form.error = Some("name required".to_string());
                    Outcome::None
                } else if let Some(err) = space_name_feedback(&name, &app.spaces.value) {
                    form.error = Some(err);
                    Outcome::None
                } else {
                    Outcome::CreateSpace(name)
                }
            }
            _ => {
                apply_edit_key(&mut form.input, key);
                form.error = space_name_feedback(&form.input.buf, &app.spaces.value);
                Outcome::None
            }
        },

        Some(Modal {
            kind: ModalKind::StackForm(form),
        }) => match key.code {
            KeyCode::Esc => Outcome::Close,
            KeyCode::Up => {
                form.row = form.row.saturating_sub(1);
                Outcome::None
            }
            KeyCode::Down => {
                form.row = (form.row + 1).min(form.last_row());
                Outcome::None
            }
            KeyCode::Tab => {
                if let Some(i) = form.field_index() {
                    form.draft.cycle_field_type(i);
                }
                Outcome::None
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.draft.add_field();
                form.row = form.last_row();
                form.submit_error = None;
                Outcome::None
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(i) = form.field_index() {
                    if form.draft.remove_field(i) {
                        form.submit_error = None;
                    } else {
                        form.submit_error = Some("at least one field is required".to_string());
                    }
                    form.row = form.row.min(form.last_row());
                }
                Outcome::None
            }
            KeyCode::Enter => submit_stack_form(form, &app.stack_names),
            _ => {
                edit_stack_form(form, key, &app.stack_names);
                Outcome::None
            }
        },
    };

    match outcome {
        Outcome::None => {}
        Outcome::Close => app.close_modal(),

        Outcome::CreateSpace(name) => match app.client.create_space(&name) {
            Ok(()) => {
                app.close_modal();
                // Re-pull the authoritative list instead of inserting locally.
                app.fetch_spaces();
                app.push_banner(Severity::Info, format!("created space \"{}\"", name));
            }
            Err(err) => {
                app.banner_for(&err);
                if let Some(Modal {
                    kind: ModalKind::SpaceForm(form),
                }) = &mut app.modal
                {
                    form.error = Some(err.to_string());
                }
            }
        },

        Outcome::CreateStack {
            name,
            space,
            schema,
        } => match app.client.create_stack(&name, &space, schema) {
            Ok(()) => {
                app.close_modal();
                app.fetch_stacks_for(&space);
                app.fetch_stack_names();
                app.push_banner(Severity::Info, format!("created stack \"{}\"", name));
            }
            Err(err) => {
                app.banner_for(&err);
                if let Some(Modal {
                    kind: ModalKind::StackForm(form),
                }) = &mut app.modal
                {
                    form.submit_error = Some(err.to_string());
                }
            }
        },
    }
}

fn space_name_feedback(candidate: &str, spaces: &[crate::model::Space]) -> Option<String> {
    if candidate.trim().is_empty() {
        return None;
    }
    if validate::is_duplicate(candidate, spaces.iter().map(|s| s.space_name.as_str())) {
        Some(validate::duplicate_message(candidate))
    } else {
        None
    }
}

fn stack_name_feedback(candidate: &str, index: &crate::sync::NameIndex) -> Option<String> {
    if candidate.trim().is_empty() {
        return None;
    }
    match index.check(candidate) {
        Uniqueness::Duplicate => Some(validate::duplicate_message(candidate)),
        // Unverified names stop blocking; the form shows its own warning.
        Uniqueness::Unique | Uniqueness::Unverified => None,
    }
}

fn edit_stack_form(form: &mut StackForm, key: KeyEvent, index: &crate::sync::NameIndex) {
    match form.field_index() {
        None => {
            apply_edit_key(&mut form.name, key);
            form.name_error = stack_name_feedback(&form.name.buf, index);
            form.submit_error = None;
        }
        Some(i) => match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                let mut name = form.draft.fields()[i].name.clone();
                name.push(c);
                form.draft.set_name(i, name);
                form.submit_error = None;
            }
            KeyCode::Backspace => {
                let mut name = form.draft.fields()[i].name.clone();
                name.pop();
                form.draft.set_name(i, name);
                form.submit_error = None;
            }
            _ => {}
        },
    }
}

fn submit_stack_form(form: &mut StackForm, index: &crate::sync::NameIndex) -> Outcome {
    let name = form.name.buf.trim().to_string();
    if name.is_empty() {
        form.name_error = Some("name required".to_string());
        return Outcome::None;
    }
    if matches!(index.check(&name), Uniqueness::Duplicate) {
        form.name_error = Some(validate::duplicate_message(&name));
        return Outcome::None;
    }
    match form.draft.build() {
        Ok(schema) => Outcome::CreateStack {
            name,
            space: form.space.clone(),
            schema,
        },
        Err(err) => {
            form.submit_error = Some(err.to_string());
            Outcome::None
        }
    }
}

fn apply_edit_key(input: &mut Input, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            input.insert_char(c);
        }
        _ => {}
    }
}
