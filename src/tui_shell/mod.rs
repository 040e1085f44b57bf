use anyhow::Result;

mod app;
mod input;
mod modal;
mod views;

// Make core shell types available to submodules via `super::...`.
use app::{App, Focus};
use input::Input;
use modal::{Modal, ModalKind, SpaceForm, StackForm};

pub fn run(api_url: String) -> Result<()> {
    app::run(api_url)
}
