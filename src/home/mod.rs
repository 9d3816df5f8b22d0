//! State store for the dev home page preview pane.
//!
//! Split along Elm-architecture lines:
//! - `HomeState`: the state shared with the component subtree
//! - `HomeAction`: inputs to the update function
//! - `Command`: side effects the update function asks the provider to run
//! - `update`: pure transition function
//! - `HomeProvider`: owns the state, runs commands, hands out accessors

pub mod action;
pub mod command;
pub mod model;
pub mod provider;
pub mod update;

pub use action::{HomeAction, RawAction};
pub use command::Command;
pub use model::{HomeState, PreviewMode, DEFAULT_PREVIEW_PAGE};
pub use provider::{home_dispatch, home_state, Dispatch, HomeProvider};
pub use update::{update, update_raw};
