//! Settings persistence.
//!
//! The settings store is plain `localStorage` under one key. The content
//! script only reads it (the options page owns writes); reads fall back to
//! defaults when the key is missing or unreadable. Cross-document changes
//! arrive as window `storage` events, handled by the bootstrap layer.

use web_sys::StorageEvent;

use crate::settings::Settings;

/// localStorage key holding the serialized [`Settings`].
pub const STORAGE_KEY: &str = "image_inspector_settings";

/// Read settings from localStorage, falling back to defaults.
#[must_use]
pub fn load_settings() -> Settings {
    let Some(window) = web_sys::window() else {
        return Settings::default();
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
            return Settings::from_json(&raw);
        }
    }
    Settings::default()
}

/// Parse the settings carried by a `storage` event, if it is ours.
///
/// A cleared key (`new_value` of `None`) yields the defaults, matching the
/// load-with-defaults behavior.
#[must_use]
pub fn settings_from_event(event: &StorageEvent) -> Option<Settings> {
    if event.key().as_deref() != Some(STORAGE_KEY) {
        return None;
    }
    Some(event.new_value().map_or_else(Settings::default, |raw| Settings::from_json(&raw)))
}
