//! Image metadata snapshot and popup content builders.
//!
//! [`ImageInfo`] captures everything the popup can display about one `<img>`
//! element. The builders turn a snapshot into label/value categories: follow
//! mode gets a compact two-category summary, fixed mode gets the full set
//! filtered by the user's `showInfo` selection.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use crate::consts::{SRCSET_DISPLAY_LIMIT, URL_DISPLAY_LIMIT};
use crate::geometry::Rect;
use crate::settings::{InfoSection, Settings};

/// Snapshot of one image element's metadata.
#[derive(Debug, Clone, Default)]
pub struct ImageInfo {
    pub src: String,
    pub title: String,
    pub alt: String,
    /// Intrinsic bitmap dimensions.
    pub natural_width: u32,
    pub natural_height: u32,
    /// Dimensions from the `width`/`height` content attributes (0 = auto).
    pub render_width: u32,
    pub render_height: u32,
    /// Laid-out dimensions including borders/padding.
    pub offset_width: i32,
    pub offset_height: i32,
    pub complete: bool,
    pub loading: String,
    pub decoding: String,
    pub cross_origin: Option<String>,
    /// Bounding client rect relative to the viewport.
    pub bounds: Rect,
    pub id: String,
    pub class_name: String,
    pub srcset: String,
}

/// One label/value row in the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
    /// When set, the value renders as a link to this URL.
    pub href: Option<String>,
}

impl InfoItem {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into(), href: None }
    }

    fn link(label: &'static str, value: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label, value: value.into(), href: Some(href.into()) }
    }
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCategory {
    pub title: &'static str,
    pub items: Vec<InfoItem>,
}

/// Truncate to at most `limit` characters, appending `...` when cut.
#[must_use]
pub fn ellipsize(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_owned()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}...")
    }
}

fn or_none(value: &str) -> String {
    if value.is_empty() { "(none)".to_owned() } else { value.to_owned() }
}

fn aspect_ratio(info: &ImageInfo) -> String {
    if info.natural_height == 0 {
        "n/a".to_owned()
    } else {
        format!("{:.2}", f64::from(info.natural_width) / f64::from(info.natural_height))
    }
}

fn px_or_auto(value: u32) -> String {
    if value == 0 { "auto".to_owned() } else { format!("{value}px") }
}

/// The path's final segment, without any query or fragment.
fn file_name(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let name = path.rsplit('/').next().unwrap_or(path);
    or_none(name)
}

fn file_extension(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => "(none)".to_owned(),
    }
}

// =============================================================
// Category builders
// =============================================================

/// Compact content for the follow-mode popup: basics plus summary sizes.
#[must_use]
pub fn follow_categories(info: &ImageInfo) -> Vec<InfoCategory> {
    vec![
        InfoCategory {
            title: "Basic",
            items: vec![
                InfoItem::text("URL", ellipsize(&info.src, URL_DISPLAY_LIMIT)),
                InfoItem::text("Title", or_none(&info.title)),
                InfoItem::text("Alt Text", or_none(&info.alt)),
            ],
        },
        InfoCategory {
            title: "Dimensions",
            items: vec![
                InfoItem::text(
                    "Original Size",
                    format!("{} x {} px", info.natural_width, info.natural_height),
                ),
                InfoItem::text("Render Size", format!("{} x {} px", info.render_width, info.render_height)),
                InfoItem::text("Aspect Ratio", aspect_ratio(info)),
            ],
        },
    ]
}

/// Full content for the fixed-mode popup, filtered by the settings'
/// `showInfo` selection and kept in canonical section order.
#[must_use]
pub fn fixed_categories(info: &ImageInfo, settings: &Settings) -> Vec<InfoCategory> {
    InfoSection::ALL
        .into_iter()
        .filter(|section| settings.shows(*section))
        .map(|section| build_section(info, section))
        .collect()
}

fn build_section(info: &ImageInfo, section: InfoSection) -> InfoCategory {
    match section {
        InfoSection::Basic => InfoCategory {
            title: "Basic Info",
            items: vec![
                InfoItem::link("URL", ellipsize(&info.src, URL_DISPLAY_LIMIT), info.src.clone()),
                InfoItem::text("Title", or_none(&info.title)),
                InfoItem::text("Alt Text", or_none(&info.alt)),
            ],
        },
        InfoSection::Dimensions => InfoCategory {
            title: "Dimensions",
            items: vec![
                InfoItem::text("Original Width", format!("{}px", info.natural_width)),
                InfoItem::text("Original Height", format!("{}px", info.natural_height)),
                InfoItem::text("Render Width", px_or_auto(info.render_width)),
                InfoItem::text("Render Height", px_or_auto(info.render_height)),
                InfoItem::text("Offset Width", format!("{}px", info.offset_width)),
                InfoItem::text("Offset Height", format!("{}px", info.offset_height)),
                InfoItem::text("Aspect Ratio", aspect_ratio(info)),
            ],
        },
        InfoSection::Metadata => InfoCategory {
            title: "Metadata",
            items: vec![
                InfoItem::text("Complete", if info.complete { "Yes" } else { "No" }),
                InfoItem::text(
                    "Loading",
                    if info.loading.is_empty() { "eager".to_owned() } else { info.loading.clone() },
                ),
                InfoItem::text(
                    "Decoding",
                    if info.decoding.is_empty() { "auto".to_owned() } else { info.decoding.clone() },
                ),
                InfoItem::text("CORS", info.cross_origin.clone().unwrap_or_else(|| "not set".to_owned())),
            ],
        },
        InfoSection::Position => InfoCategory {
            title: "Position",
            items: vec![
                InfoItem::text("Top", format!("{}px", info.bounds.y.round())),
                InfoItem::text("Left", format!("{}px", info.bounds.x.round())),
                InfoItem::text("Bottom", format!("{}px", info.bounds.bottom().round())),
                InfoItem::text("Right", format!("{}px", info.bounds.right().round())),
            ],
        },
        InfoSection::File => InfoCategory {
            title: "File",
            items: vec![
                InfoItem::text("Name", file_name(&info.src)),
                InfoItem::text("Extension", file_extension(&info.src)),
            ],
        },
        InfoSection::Attributes => InfoCategory {
            title: "Attributes",
            items: vec![
                InfoItem::text("ID", or_none(&info.id)),
                InfoItem::text("Class", or_none(&info.class_name)),
                InfoItem::text(
                    "SrcSet",
                    if info.srcset.is_empty() {
                        "(none)".to_owned()
                    } else {
                        ellipsize(&info.srcset, SRCSET_DISPLAY_LIMIT)
                    },
                ),
            ],
        },
    }
}
