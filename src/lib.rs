pub mod config;
pub mod data_provider;
pub mod error;
pub mod home;
pub mod log;
pub mod storage;

pub use error::{Error, Result};
pub use home::{
    home_dispatch, home_state, Dispatch, HomeAction, HomeProvider, HomeState, PreviewMode,
    RawAction,
};
