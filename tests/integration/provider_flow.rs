//! Provider mount, dispatch, and accessor behavior.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::json;

use dev_home::config::HomeConfig;
use dev_home::storage::{MemoryStorage, PREVIEW_PAGE_KEY};
use dev_home::{home_dispatch, home_state, HomeAction, HomeProvider, PreviewMode, RawAction};

use crate::fixtures::MemoryHome;

#[test]
fn test_fresh_mount_state() {
    let home = MemoryHome::new();
    let state = home.provider.state();

    assert_eq!(state.service_url, "http://localhost:3000/api/fake-roc");
    assert_eq!(state.database_name, "eln");
    assert_eq!(state.preview_page_path, "/dev/base-page");
    assert_eq!(state.preview_mode, PreviewMode::Closed);
    assert_eq!(state.selected_sample_id, None);
}

#[test]
fn test_open_no_sample_regardless_of_prior_state() {
    let home = MemoryHome::new();
    let dispatch = home.provider.dispatcher();

    for prior in [
        None,
        Some(HomeAction::SelectSample("x".to_string())),
        Some(HomeAction::OpenNoSample),
    ] {
        if let Some(action) = prior {
            dispatch.dispatch(action);
        }
        dispatch.dispatch(HomeAction::OpenNoSample);

        let state = home.provider.state();
        assert_eq!(state.preview_mode, PreviewMode::NoSample);
        assert_eq!(state.selected_sample_id, None);
    }
}

#[test]
fn test_select_sample_then_set_page_keeps_selection() {
    let home = MemoryHome::new();
    home.provider
        .dispatch(HomeAction::SelectSample("x".to_string()));
    home.provider
        .dispatch(HomeAction::SetPreviewPage("/p".to_string()));

    let state = home.provider.state();
    assert_eq!(state.preview_mode, PreviewMode::Sample);
    assert_eq!(state.selected_sample_id.as_deref(), Some("x"));
    assert_eq!(state.preview_page_path, "/p");
    assert_eq!(home.storage.get(PREVIEW_PAGE_KEY).as_deref(), Some("/p"));
}

#[test]
fn test_config_is_never_changed_by_actions() {
    let config = HomeConfig {
        service_url: Some("https://roc.example.org/api".to_string()),
        database_name: Some("lab".to_string()),
    };
    let provider = HomeProvider::mount(config, MemoryStorage::new());

    provider.dispatch(HomeAction::SelectSample("s".to_string()));
    provider.dispatch(HomeAction::SetPreviewPage("/dev/x".to_string()));
    provider.dispatch(HomeAction::OpenNoSample);

    let state = provider.state();
    assert_eq!(state.service_url, "https://roc.example.org/api");
    assert_eq!(state.database_name, "lab");
    assert_eq!(provider.data_provider().url(), state.service_url);
    assert_eq!(provider.data_provider().database(), state.database_name);
}

#[test]
fn test_raw_actions_from_json() {
    let home = MemoryHome::new();
    let raw: RawAction =
        serde_json::from_value(json!({ "type": "SELECT_SAMPLE", "payload": "json-1" })).unwrap();

    home.provider.dispatch_raw(raw);

    assert_eq!(
        home.provider.state().selected_sample_id.as_deref(),
        Some("json-1")
    );
}

#[test]
fn test_unknown_action_is_fatal_and_state_unchanged() {
    let home = MemoryHome::new();
    let dispatch = home.provider.dispatcher();
    dispatch.dispatch(HomeAction::SetPreviewPage("/dev/before".to_string()));
    let before = home.provider.state();

    let result = catch_unwind(AssertUnwindSafe(|| {
        dispatch.dispatch_raw(RawAction::new("CLOSE", Some(json!("x"))));
    }));

    assert!(result.is_err());
    assert_eq!(home.provider.state(), before);

    // The store keeps working after the rejected action.
    dispatch.dispatch(HomeAction::OpenNoSample);
    assert_eq!(home.provider.state().preview_mode, PreviewMode::NoSample);
}

#[test]
fn test_accessors_outside_provider_are_inert() {
    let dispatch = home_dispatch(None);
    dispatch.dispatch(HomeAction::SelectSample("ignored".to_string()));

    let state = home_state(None);
    assert_eq!(state.preview_mode, PreviewMode::Closed);
    assert_eq!(state.selected_sample_id, None);
}

#[test]
fn test_nested_consumers_share_one_store() {
    let home = MemoryHome::new();

    // Two "components" receive the provider by parameter.
    let writer = |provider: Option<&HomeProvider>| {
        home_dispatch(provider).dispatch(HomeAction::SelectSample("shared".to_string()));
    };
    let reader = |provider: Option<&HomeProvider>| home_state(provider).selected_sample_id;

    writer(Some(&home.provider));
    assert_eq!(reader(Some(&home.provider)).as_deref(), Some("shared"));
}
