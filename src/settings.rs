//! Typed settings model.
//!
//! Mirrors the JSON shape the options UI writes to the settings store:
//! `{ "popupPosition": "follow", "showInfo": ["basic", …] }`. Missing fields
//! take defaults and malformed JSON falls back to the full default set, so
//! loading never fails.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// How the popup is positioned on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Popup tracks the pointer and hides when the pointer leaves the image.
    #[default]
    Follow,
    /// Popup stays where placed; the user can drag and resize it.
    Fixed,
}

/// A category of image information the fixed-mode popup can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoSection {
    Basic,
    Dimensions,
    Metadata,
    Position,
    File,
    Attributes,
}

impl InfoSection {
    /// All sections in canonical display order.
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Dimensions,
        Self::Metadata,
        Self::Position,
        Self::File,
        Self::Attributes,
    ];
}

/// User settings, loaded at script start and replaced on change events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub popup_position: Placement,
    #[serde(default = "default_show_info")]
    pub show_info: Vec<InfoSection>,
}

fn default_show_info() -> Vec<InfoSection> {
    InfoSection::ALL.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self { popup_position: Placement::Follow, show_info: default_show_info() }
    }
}

impl Settings {
    /// Parse settings from stored JSON, falling back to defaults on any error.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Whether the fixed-mode popup should display `section`.
    #[must_use]
    pub fn shows(&self, section: InfoSection) -> bool {
        self.show_info.contains(&section)
    }
}
