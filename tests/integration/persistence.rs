//! Preview page persistence across remounts.

use dev_home::config::HomeConfig;
use dev_home::storage::{ClientStorage, FileStorage, MemoryStorage, PREVIEW_PAGE_KEY};
use dev_home::{HomeAction, PreviewMode};

use crate::fixtures::{MemoryHome, TempStorage};

#[test]
fn test_set_page_is_written_under_fixed_key() {
    let home = MemoryHome::new();
    home.provider
        .dispatch(HomeAction::SetPreviewPage("/dev/custom".to_string()));

    assert_eq!(
        home.storage.get("dev-home-iframePage").as_deref(),
        Some("/dev/custom")
    );
}

#[test]
fn test_remount_restores_page_but_not_selection() {
    let storage = MemoryStorage::new();
    {
        let home = MemoryHome::with_storage(storage.clone());
        home.provider
            .dispatch(HomeAction::SetPreviewPage("/dev/kept".to_string()));
        home.provider
            .dispatch(HomeAction::SelectSample("lost".to_string()));
    }

    let home = MemoryHome::with_storage(storage);
    let state = home.provider.state();
    assert_eq!(state.preview_page_path, "/dev/kept");
    assert_eq!(state.preview_mode, PreviewMode::Closed);
    assert_eq!(state.selected_sample_id, None);
}

#[test]
fn test_file_storage_survives_remount() {
    let temp = TempStorage::new();
    {
        let provider = temp.mount(HomeConfig::default());
        provider.dispatch(HomeAction::SetPreviewPage("/dev/on-disk".to_string()));
    }

    let provider = temp.mount(HomeConfig::default());
    assert_eq!(provider.state().preview_page_path, "/dev/on-disk");

    let storage = FileStorage::open(&temp.path).unwrap();
    assert_eq!(
        storage.get_item(PREVIEW_PAGE_KEY).unwrap().as_deref(),
        Some("/dev/on-disk")
    );
}

#[test]
fn test_unrelated_keys_are_preserved() {
    let temp = TempStorage::new();
    {
        let mut storage = FileStorage::open(&temp.path).unwrap();
        storage.set_item("other-pref", "dark").unwrap();
    }

    let provider = temp.mount(HomeConfig::default());
    provider.dispatch(HomeAction::SetPreviewPage("/dev/x".to_string()));

    let storage = FileStorage::open(&temp.path).unwrap();
    assert_eq!(
        storage.get_item("other-pref").unwrap().as_deref(),
        Some("dark")
    );
}
