use super::*;
use crate::store::{MemoryStore, StoreError};

/// A store whose backing storage cannot even be read.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&mut self, _mode: Mode) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

// =============================================================
// start
// =============================================================

#[test]
fn start_reads_stored_choice() {
    let session = ThemeSession::start(MemoryStore::with_value("dark"), false);
    assert_eq!(session.effective_mode(), Mode::Dark);
    assert!(!session.is_following_system());
}

#[test]
fn start_with_empty_store_follows_system() {
    let session = ThemeSession::start(MemoryStore::new(), true);
    assert_eq!(session.effective_mode(), Mode::Dark);
    assert!(session.is_following_system());
}

#[test]
fn start_with_garbage_follows_system() {
    let session = ThemeSession::start(MemoryStore::with_value("blue"), false);
    assert!(session.is_following_system());
    assert_eq!(session.effective_mode(), Mode::Light);
}

#[test]
fn start_with_unreadable_store_follows_system() {
    let session = ThemeSession::start(BrokenStore, true);
    assert!(session.is_following_system());
    assert_eq!(session.effective_mode(), Mode::Dark);
}

// =============================================================
// persistence
// =============================================================

#[test]
fn toggle_persists_new_mode() {
    let mut session = ThemeSession::start(MemoryStore::new(), false);
    assert_eq!(session.toggle(), Mode::Dark);
    assert_eq!(session.store().value(), Some("dark"));
    assert_eq!(session.toggle(), Mode::Light);
    assert_eq!(session.store().value(), Some("light"));
}

#[test]
fn reset_clears_stored_choice() {
    let mut session = ThemeSession::start(MemoryStore::with_value("light"), true);
    assert_eq!(session.reset_to_system(), Mode::Dark);
    assert_eq!(session.store().value(), None);
    assert!(session.is_following_system());
}

#[test]
fn write_failure_still_changes_mode() {
    let mut session = ThemeSession::start(MemoryStore::new().read_only(), false);
    assert_eq!(session.toggle(), Mode::Dark);
    assert!(!session.is_following_system());
    assert_eq!(session.store().value(), None);
}

#[test]
fn unavailable_store_still_toggles_and_resets() {
    let mut session = ThemeSession::start(BrokenStore, false);
    assert_eq!(session.toggle(), Mode::Dark);
    assert_eq!(session.reset_to_system(), Mode::Light);
}

// =============================================================
// system changes
// =============================================================

#[test]
fn system_change_ignored_after_toggle() {
    let mut session = ThemeSession::start(MemoryStore::new(), false);
    session.toggle();
    assert_eq!(session.on_system_change(true), None);
    assert_eq!(session.effective_mode(), Mode::Dark);
}

#[test]
fn system_change_applies_after_reset() {
    let mut session = ThemeSession::start(MemoryStore::with_value("dark"), false);
    assert_eq!(session.on_system_change(true), None);
    session.reset_to_system();
    assert_eq!(session.on_system_change(false), Some(Mode::Light));
}

#[test]
fn system_change_does_not_touch_store() {
    let mut session = ThemeSession::start(MemoryStore::with_value("light"), false);
    session.on_system_change(true);
    assert_eq!(session.store().value(), Some("light"));
}

// =============================================================
// view
// =============================================================

#[test]
fn view_follows_session_state() {
    let labels = ThemeLabels::default();
    let mut session = ThemeSession::start(MemoryStore::new(), true);
    assert_eq!(session.view(&labels).attribute, None);

    session.toggle();
    let view = session.view(&labels);
    assert_eq!(view.attribute, Some(Mode::Light));
    assert_eq!(view.aria_label, labels.to_dark_label);
}

#[test]
fn change_source_display() {
    assert_eq!(ChangeSource::Manual.to_string(), "manual");
    assert_eq!(ChangeSource::System.to_string(), "system");
    assert_eq!(ChangeSource::Reset.to_string(), "reset");
}

#[test]
fn manual_choice_under_dark_system_then_reset() {
    let mut session = ThemeSession::start(MemoryStore::new(), true);
    assert_eq!(session.toggle(), Mode::Light);
    assert_eq!(session.store().value(), Some("light"));

    assert_eq!(session.on_system_change(false), None);
    assert_eq!(session.reset_to_system(), Mode::Light);
    assert_eq!(session.on_system_change(true), Some(Mode::Dark));
}
