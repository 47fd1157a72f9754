use std::rc::Rc;

use super::common::mocks::FailingStorage;
use super::common::{ memory_store, setup, stored_theme };
use crate::storage::{ MemoryStorage, ThemeStore, THEME_KEY };
use crate::utils::{ Theme, UiState };

#[test]
fn test_nav_parity_after_n_toggles() {
    setup();
    let (store, _) = memory_store();
    for n in 0..25usize {
        let mut state = UiState::mount(&store);
        for _ in 0..n {
            state.toggle_nav();
        }
        assert_eq!(state.nav_open(), n % 2 == 1, "after {} toggles", n);
    }
}

#[test]
fn test_theme_parity_and_marker_in_sync() {
    setup();
    let (store, backend) = memory_store();
    let mut state = UiState::mount(&store);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.marker(), Some("dark"));

    for n in 1..=25usize {
        let theme = state.toggle_theme(&store);
        let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(theme, expected);
        assert_eq!(state.theme(), expected);
        assert_eq!(state.marker().is_some(), state.theme() == Theme::Dark);
        assert_eq!(stored_theme(&*backend).as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn test_nav_and_theme_are_independent() {
    setup();
    let (store, _) = memory_store();
    let mut state = UiState::mount(&store);
    state.toggle_nav();
    state.toggle_theme(&store);
    assert!(state.nav_open());
    assert_eq!(state.theme(), Theme::Light);

    state.toggle_theme(&store);
    assert!(state.nav_open());
    state.toggle_nav();
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn test_persisted_theme_survives_remount() {
    setup();
    let (store, _) = memory_store();
    let mut first = UiState::mount(&store);
    first.toggle_theme(&store);
    first.toggle_nav();

    let second = UiState::mount(&store);
    assert_eq!(second.theme(), Theme::Light);
    assert!(!second.nav_open());
}

#[test]
fn test_first_mount_defaults_to_dark() {
    setup();
    let (store, _) = memory_store();
    let state = UiState::mount(&store);
    assert_eq!(state.theme(), Theme::Dark);
    assert!(!state.nav_open());
}

#[test]
fn test_malformed_value_is_ignored() {
    setup();
    for raw in ["", "Light", "blue", "{\"theme\":\"light\"}", "undefined"] {
        let store = ThemeStore::new(Rc::new(MemoryStorage::with_item(THEME_KEY, raw)));
        assert_eq!(store.load(), None, "{:?}", raw);
        assert_eq!(UiState::mount(&store).theme(), Theme::Dark, "{:?}", raw);
    }
}

#[test]
fn test_stored_light_is_adopted() {
    setup();
    let store = ThemeStore::new(Rc::new(MemoryStorage::with_item(THEME_KEY, "light")));
    assert_eq!(UiState::mount(&store).theme(), Theme::Light);
}

#[test]
fn test_unreadable_storage_mounts_with_default() {
    setup();
    let store = ThemeStore::new(Rc::new(FailingStorage::new(true, false)));
    assert_eq!(store.load(), None);
    assert_eq!(UiState::mount(&store).theme(), Theme::Dark);
}

#[test]
fn test_write_failure_keeps_new_theme() {
    setup();
    let backend = Rc::new(FailingStorage::new(true, true));
    let store = ThemeStore::new(backend.clone());
    let mut state = UiState::mount(&store);

    assert!(store.save(Theme::Light).is_err());
    let theme = state.toggle_theme(&store);
    assert_eq!(theme, Theme::Light);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.marker(), None);
    assert_eq!(backend.write_attempts.get(), 2);

    state.toggle_theme(&store);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.marker(), Some("dark"));
}
