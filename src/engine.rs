//! Overlay engine: popup state plus the event handlers that drive it.
//!
//! [`OverlayCore`] contains all logic that does not depend on the DOM, so it
//! can be tested natively. Event handlers return [`Action`]s for the host
//! (the bootstrap layer) to apply to the popup element; the core never
//! touches `web_sys` itself.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{CURSOR_GAP_PX, VIEWPORT_MARGIN_PX};
use crate::geometry::{Point, Rect, Size};
use crate::info::{ImageInfo, InfoCategory, fixed_categories, follow_categories};
use crate::input::{Gesture, gesture_for_pointer_down};
use crate::position::{clamp_resize, clamp_to_viewport, follow_position};
use crate::settings::{Placement, Settings};

/// Instructions returned from event handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Render these categories into the popup and make it visible.
    ShowContent(Vec<InfoCategory>),
    /// Move the popup to a new top-left corner.
    Reposition(Point),
    /// Apply a new explicit size (fixed-mode resize).
    Resize(Size),
    /// Hide the popup.
    Hide,
}

/// Transient popup UI state, owned by the overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupState {
    pub visible: bool,
    /// Top-left corner in viewport coordinates.
    pub position: Point,
    /// Last measured or explicitly applied size.
    pub size: Size,
    /// A fixed-mode popup has been positioned once; later hovers keep it.
    pub placed: bool,
}

/// Core overlay state and event handling, independent of the DOM.
#[derive(Debug, Clone)]
pub struct OverlayCore {
    pub settings: Settings,
    pub popup: PopupState,
    pub gesture: Gesture,
    pub viewport: Size,
    /// Most recent pointer position, used to re-place a follow-mode popup
    /// after its real size is measured.
    last_pointer: Point,
}

impl Default for OverlayCore {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            popup: PopupState::default(),
            gesture: Gesture::Idle,
            viewport: Size::default(),
            last_pointer: Point::default(),
        }
    }
}

impl OverlayCore {
    #[must_use]
    pub fn new(settings: Settings, viewport: Size) -> Self {
        Self { settings, viewport, ..Self::default() }
    }

    fn popup_rect(&self) -> Rect {
        Rect::from_origin_size(self.popup.position, self.popup.size)
    }

    // --- Settings / viewport inputs ---

    /// Replace the settings after a store change event.
    ///
    /// A placement change hides the popup and resets placement and any
    /// active gesture, so the next hover starts clean in the new mode.
    pub fn apply_settings(&mut self, settings: Settings) -> Vec<Action> {
        let mode_changed = settings.popup_position != self.settings.popup_position;
        self.settings = settings;
        if !mode_changed {
            return Vec::new();
        }
        self.gesture = Gesture::Idle;
        self.popup.placed = false;
        if self.popup.visible {
            self.popup.visible = false;
            vec![Action::Hide]
        } else {
            Vec::new()
        }
    }

    /// Update the viewport size and re-clamp a visible popup into it.
    pub fn viewport_resized(&mut self, viewport: Size) -> Vec<Action> {
        self.viewport = viewport;
        if !self.popup.visible {
            return Vec::new();
        }
        let clamped =
            clamp_to_viewport(self.popup.position, self.popup.size, self.viewport, VIEWPORT_MARGIN_PX);
        if clamped == self.popup.position {
            Vec::new()
        } else {
            self.popup.position = clamped;
            vec![Action::Reposition(clamped)]
        }
    }

    /// Record the popup's rendered size, reported by the host after content
    /// changes. A visible popup is re-placed with the real size: follow mode
    /// redoes the flip/clamp decision, fixed mode re-clamps in place, so a
    /// placement made before the first measurement cannot leave the popup
    /// overflowing the viewport.
    pub fn set_measured_size(&mut self, size: Size) -> Vec<Action> {
        self.popup.size = size;
        if !self.popup.visible {
            return Vec::new();
        }
        let pos = match self.settings.popup_position {
            Placement::Follow => {
                follow_position(self.last_pointer, size, self.viewport, VIEWPORT_MARGIN_PX)
            }
            Placement::Fixed => {
                clamp_to_viewport(self.popup.position, size, self.viewport, VIEWPORT_MARGIN_PX)
            }
        };
        if pos == self.popup.position {
            Vec::new()
        } else {
            self.popup.position = pos;
            vec![Action::Reposition(pos)]
        }
    }

    // --- Pointer events ---

    /// The pointer entered an image: build content for the current mode and
    /// show the popup.
    pub fn pointer_over_image(&mut self, info: &ImageInfo, pointer: Point) -> Vec<Action> {
        self.last_pointer = pointer;
        self.popup.visible = true;

        let categories = match self.settings.popup_position {
            Placement::Follow => follow_categories(info),
            Placement::Fixed => fixed_categories(info, &self.settings),
        };
        let mut actions = vec![Action::ShowContent(categories)];

        match self.settings.popup_position {
            Placement::Follow => {
                let pos = follow_position(pointer, self.popup.size, self.viewport, VIEWPORT_MARGIN_PX);
                self.popup.position = pos;
                actions.push(Action::Reposition(pos));
            }
            Placement::Fixed => {
                // Only the first hover places a fixed popup; afterwards it
                // stays wherever the user left it.
                if !self.popup.placed {
                    let pos = clamp_to_viewport(
                        Point::new(pointer.x + CURSOR_GAP_PX, pointer.y + CURSOR_GAP_PX),
                        self.popup.size,
                        self.viewport,
                        VIEWPORT_MARGIN_PX,
                    );
                    self.popup.position = pos;
                    self.popup.placed = true;
                    actions.push(Action::Reposition(pos));
                }
            }
        }
        actions
    }

    /// Pointer moved. `over_image` tells the core whether the pointer is
    /// currently over an image element (follow-mode tracking only applies
    /// then, matching the hover-driven show behavior).
    pub fn pointer_move(&mut self, pointer: Point, over_image: bool) -> Vec<Action> {
        self.last_pointer = pointer;
        match self.gesture {
            Gesture::Dragging { grab } => {
                let desired = Point::new(pointer.x - grab.x, pointer.y - grab.y);
                let pos = clamp_to_viewport(desired, self.popup.size, self.viewport, VIEWPORT_MARGIN_PX);
                self.popup.position = pos;
                vec![Action::Reposition(pos)]
            }
            Gesture::Resizing { origin } => {
                let desired = Size::new(pointer.x - origin.x, pointer.y - origin.y);
                let size = clamp_resize(origin, desired, self.viewport, VIEWPORT_MARGIN_PX);
                self.popup.size = size;
                vec![Action::Resize(size)]
            }
            Gesture::Idle => {
                if self.popup.visible
                    && over_image
                    && self.settings.popup_position == Placement::Follow
                {
                    let pos =
                        follow_position(pointer, self.popup.size, self.viewport, VIEWPORT_MARGIN_PX);
                    self.popup.position = pos;
                    vec![Action::Reposition(pos)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Pointer-down on the popup element starts a drag or resize gesture in
    /// fixed mode. Follow mode ignores it (the popup is click-through).
    pub fn pointer_down_on_popup(&mut self, pointer: Point) -> Vec<Action> {
        if self.settings.popup_position == Placement::Fixed && self.popup.visible {
            self.gesture = gesture_for_pointer_down(pointer, self.popup_rect());
        }
        Vec::new()
    }

    /// Pointer released anywhere: end any active gesture.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.gesture = Gesture::Idle;
        Vec::new()
    }

    /// The pointer left an image. Follow mode hides; a fixed popup stays.
    pub fn pointer_out_image(&mut self) -> Vec<Action> {
        if self.settings.popup_position == Placement::Follow {
            self.hide()
        } else {
            Vec::new()
        }
    }

    /// An image was clicked while the popup is showing. Follow mode hides.
    pub fn image_clicked(&mut self) -> Vec<Action> {
        if self.settings.popup_position == Placement::Follow && self.popup.visible {
            self.hide()
        } else {
            Vec::new()
        }
    }

    /// The fixed-mode close button was pressed.
    pub fn close_requested(&mut self) -> Vec<Action> {
        self.hide()
    }

    fn hide(&mut self) -> Vec<Action> {
        if self.popup.visible {
            self.popup.visible = false;
            vec![Action::Hide]
        } else {
            Vec::new()
        }
    }
}
