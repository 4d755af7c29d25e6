use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_strings_match_stored_literals() {
    assert_eq!(Mode::Light.as_str(), "light");
    assert_eq!(Mode::Dark.as_str(), "dark");
    assert_eq!(Mode::Dark.to_string(), "dark");
}

#[test]
fn mode_flipped_swaps_variants() {
    assert_eq!(Mode::Light.flipped(), Mode::Dark);
    assert_eq!(Mode::Dark.flipped(), Mode::Light);
}

#[test]
fn mode_from_dark_signal() {
    assert_eq!(Mode::from_dark(true), Mode::Dark);
    assert_eq!(Mode::from_dark(false), Mode::Light);
    assert!(Mode::Dark.is_dark());
    assert!(!Mode::Light.is_dark());
}

#[test]
fn mode_parse_rejects_other_casing() {
    let err = "Dark".parse::<Mode>().expect_err("casing should not match");
    assert_eq!(err, ParseModeError("Dark".to_owned()));
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Mode::Dark).expect("serialize"), "\"dark\"");
    let mode: Mode = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(mode, Mode::Light);
}

// =============================================================
// Preference
// =============================================================

#[test]
fn preference_from_recognized_values() {
    assert_eq!(Preference::from_stored(Some("dark")), Preference::Dark);
    assert_eq!(Preference::from_stored(Some("light")), Preference::Light);
}

#[test]
fn preference_absent_is_unset() {
    assert_eq!(Preference::from_stored(None), Preference::Unset);
}

#[test]
fn preference_garbage_is_unset() {
    for raw in ["", " dark", "DARK", "true", "system", "null"] {
        assert_eq!(Preference::from_stored(Some(raw)), Preference::Unset, "{raw:?}");
    }
}

#[test]
fn preference_mode_and_display() {
    assert_eq!(Preference::Unset.mode(), None);
    assert_eq!(Preference::Dark.mode(), Some(Mode::Dark));
    assert_eq!(Preference::Unset.to_string(), "unset");
    assert_eq!(Preference::Light.to_string(), "light");
    assert_eq!(Preference::from(Mode::Dark), Preference::Dark);
}
