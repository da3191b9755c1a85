use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_placement_is_follow() {
    assert_eq!(Settings::default().popup_position, Placement::Follow);
}

#[test]
fn default_shows_every_section() {
    let settings = Settings::default();
    for section in InfoSection::ALL {
        assert!(settings.shows(section), "{section:?} missing from defaults");
    }
}

// =============================================================
// JSON parsing
// =============================================================

#[test]
fn parses_stored_shape() {
    let raw = r#"{"popupPosition":"fixed","showInfo":["basic","position"]}"#;
    let settings = Settings::from_json(raw);
    assert_eq!(settings.popup_position, Placement::Fixed);
    assert!(settings.shows(InfoSection::Basic));
    assert!(settings.shows(InfoSection::Position));
    assert!(!settings.shows(InfoSection::Metadata));
}

#[test]
fn missing_fields_take_defaults() {
    let settings = Settings::from_json(r#"{"popupPosition":"fixed"}"#);
    assert_eq!(settings.popup_position, Placement::Fixed);
    assert_eq!(settings.show_info, InfoSection::ALL.to_vec());

    let settings = Settings::from_json(r#"{"showInfo":[]}"#);
    assert_eq!(settings.popup_position, Placement::Follow);
    assert!(settings.show_info.is_empty());
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(Settings::from_json("not json"), Settings::default());
    assert_eq!(Settings::from_json(""), Settings::default());
    assert_eq!(Settings::from_json(r#"{"popupPosition":"sideways"}"#), Settings::default());
}

#[test]
fn round_trips_through_json() {
    let settings = Settings {
        popup_position: Placement::Fixed,
        show_info: vec![InfoSection::Dimensions, InfoSection::File],
    };
    let raw = serde_json::to_string(&settings).unwrap();
    assert_eq!(Settings::from_json(&raw), settings);
}

#[test]
fn serializes_camel_case_keys() {
    // The store's wire shape is what the options UI writes.
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("popupPosition"));
    assert!(json.contains("showInfo"));
    assert!(json.contains("\"follow\""));
}

// =============================================================
// shows
// =============================================================

#[test]
fn shows_respects_subset() {
    let settings = Settings { popup_position: Placement::Fixed, show_info: vec![InfoSection::Attributes] };
    assert!(settings.shows(InfoSection::Attributes));
    assert!(!settings.shows(InfoSection::Basic));
}
