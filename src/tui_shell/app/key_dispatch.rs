use crossterm::event::{KeyCode, KeyEvent};

use crate::grid::TILES_PER_ROW;

use super::*;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        forms::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('r') => app.refresh_current(),
        KeyCode::Char('l') => app.open_log_modal(),
        KeyCode::Char('n') => app.open_space_form(),
        KeyCode::Char('a') => {
            if app.nav.active_space().is_some() && app.nav.active_stack().is_none() {
                app.open_stack_form();
            }
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Sidebar if !app.nav.is_queue() => Focus::Main,
                _ => Focus::Sidebar,
            };
        }
        KeyCode::Esc => handle_escape(app),
        KeyCode::Backspace | KeyCode::Char('b') => {
            if app.nav.active_stack().is_some() {
                let effects = app.nav.back();
                app.apply_effects(effects);
            }
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Up => handle_up(app),
        KeyCode::Down => handle_down(app),
        KeyCode::Left => {
            if app.focus == Focus::Main && app.nav.active_stack().is_none() {
                app.grid_selected = app.grid_selected.saturating_sub(1);
            }
        }
        KeyCode::Right => {
            if app.focus == Focus::Main && app.nav.active_stack().is_none() {
                let max = app.stacks.value.len().saturating_sub(1);
                app.grid_selected = (app.grid_selected + 1).min(max);
            }
        }
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    if app.banner.is_some() {
        app.banner = None;
        return;
    }
    if app.nav.active_stack().is_some() {
        let effects = app.nav.back();
        app.apply_effects(effects);
        return;
    }
    app.focus = Focus::Sidebar;
}

fn handle_enter(app: &mut App) {
    match app.focus {
        Focus::Sidebar => {
            if app.sidebar_selected == 0 {
                let effects = app.nav.select_queue();
                app.apply_effects(effects);
                return;
            }
            let Some(space) = app
                .spaces
                .value
                .get(app.sidebar_selected - 1)
                .map(|s| s.space_name.clone())
            else {
                return;
            };
            let effects = app.nav.select_space(&space);
            app.apply_effects(effects);
            app.focus = Focus::Main;
        }
        Focus::Main => {
            if app.nav.active_stack().is_some() {
                return;
            }
            let Some(stack) = app
                .stacks
                .value
                .get(app.grid_selected)
                .map(|s| s.stack_name.clone())
            else {
                return;
            };
            let effects = app.nav.select_stack(&stack);
            app.apply_effects(effects);
        }
    }
}

fn handle_up(app: &mut App) {
    match app.focus {
        Focus::Sidebar => {
            app.sidebar_selected = app.sidebar_selected.saturating_sub(1);
        }
        Focus::Main => {
            if app.nav.active_stack().is_some() {
                app.doc_selected = app.doc_selected.saturating_sub(1);
            } else {
                app.grid_selected = app.grid_selected.saturating_sub(TILES_PER_ROW);
            }
        }
    }
}

fn handle_down(app: &mut App) {
    match app.focus {
        Focus::Sidebar => {
            let max = app.spaces.value.len();
            app.sidebar_selected = (app.sidebar_selected + 1).min(max);
        }
        Focus::Main => {
            if app.nav.active_stack().is_some() {
                let max = app.documents.value.len().saturating_sub(1);
                app.doc_selected = (app.doc_selected + 1).min(max);
            } else {
                let max = app.stacks.value.len().saturating_sub(1);
                app.grid_selected = (app.grid_selected + TILES_PER_ROW).min(max);
            }
        }
    }
}
