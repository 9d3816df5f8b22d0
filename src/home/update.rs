//! Pure update function for the home store.
//!
//! The update function mutates the state in place and returns the commands
//! the provider must run. It performs no I/O itself.

use crate::{hlog_debug, Result};

use super::action::{HomeAction, RawAction};
use super::command::Command;
use super::model::{HomeState, PreviewMode};

/// State + Action → Commands
pub fn update(state: &mut HomeState, action: HomeAction) -> Vec<Command> {
    let mut cmds = Vec::new();
    hlog_debug!("update action={}", action.kind());

    match action {
        HomeAction::OpenNoSample => {
            state.preview_mode = PreviewMode::NoSample;
            state.selected_sample_id = None;
        }

        HomeAction::SelectSample(sample_id) => {
            state.preview_mode = PreviewMode::Sample;
            state.selected_sample_id = Some(sample_id);
        }

        HomeAction::SetPreviewPage(path) => {
            // Storage only sees a write when the value actually changes.
            if state.preview_page_path != path {
                state.preview_page_path = path.clone();
                cmds.push(Command::PersistPreviewPage { path });
            }
        }
    }

    cmds
}

/// Convert and apply a raw action. On an unknown action the state is left
/// untouched and `Error::UnknownAction` is returned.
pub fn update_raw(state: &mut HomeState, raw: RawAction) -> Result<Vec<Command>> {
    let action = HomeAction::try_from(raw)?;
    Ok(update(state, action))
}
