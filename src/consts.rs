//! Shared numeric constants for the overlay crate.

// ── Placement ───────────────────────────────────────────────────

/// Gap between the pointer and the popup's near corner, in CSS pixels.
pub const CURSOR_GAP_PX: f64 = 10.0;

/// Minimum distance kept between the popup and the viewport edges.
pub const VIEWPORT_MARGIN_PX: f64 = 10.0;

// ── Fixed-mode interactions ─────────────────────────────────────

/// Width of the resize-grab band along the popup's right/bottom edges.
pub const RESIZE_EDGE_PX: f64 = 10.0;

/// Minimum popup width while resizing, in CSS pixels.
pub const MIN_POPUP_WIDTH_PX: f64 = 250.0;

/// Minimum popup height while resizing, in CSS pixels.
pub const MIN_POPUP_HEIGHT_PX: f64 = 150.0;

// ── Content ─────────────────────────────────────────────────────

/// Display limit for the image URL before it is ellipsized.
pub const URL_DISPLAY_LIMIT: usize = 70;

/// Display limit for the `srcset` attribute before it is ellipsized.
pub const SRCSET_DISPLAY_LIMIT: usize = 50;
