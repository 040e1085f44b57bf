use ratatui::layout::Rect;

use super::{App, Focus};
use crate::nav::NavState;

mod queue;
mod sidebar;
mod space;
mod stack;

pub(super) fn draw_sidebar(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    sidebar::draw(frame, area, app);
}

/// Mounts the view the navigation state selects.
pub(super) fn draw_main(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    match &app.nav {
        NavState::Queue => queue::draw(frame, area, app),
        NavState::Space { space, stack: None } => space::draw(frame, area, app, space),
        NavState::Space {
            space,
            stack: Some(stack),
        } => stack::draw(frame, area, app, space, stack),
    }
}
