//! Reading page state: image metadata, event targets, and viewport size.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement, MouseEvent, Window};

use crate::geometry::{Point, Rect, Size};
use crate::info::ImageInfo;
use crate::render::{CLOSE_CLASS, POPUP_CLASS};

/// Snapshot everything the popup can display about `img`.
#[must_use]
pub fn image_info(img: &HtmlImageElement) -> ImageInfo {
    let bounds = img.get_bounding_client_rect();
    ImageInfo {
        src: img.src(),
        title: img.title(),
        alt: img.alt(),
        natural_width: img.natural_width(),
        natural_height: img.natural_height(),
        render_width: img.width(),
        render_height: img.height(),
        offset_width: img.offset_width(),
        offset_height: img.offset_height(),
        complete: img.complete(),
        loading: img.get_attribute("loading").unwrap_or_default(),
        decoding: img.decoding(),
        cross_origin: img.cross_origin(),
        bounds: Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        id: img.id(),
        class_name: img.class_name(),
        srcset: img.srcset(),
    }
}

/// Resolve the image an event happened on: the target itself if it is an
/// `<img>`, or its closest `<img>` ancestor. Returns `None` for anything
/// else, including the popup element itself.
#[must_use]
pub fn image_from_event(event: &Event) -> Option<HtmlImageElement> {
    let target = event.target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    if element.closest(&format!(".{POPUP_CLASS}")).ok().flatten().is_some() {
        return None;
    }
    element.closest("img").ok().flatten()?.dyn_into().ok()
}

/// Whether the event target is (inside) the popup's close button.
#[must_use]
pub fn event_hits_close_button(event: &Event) -> bool {
    element_of(event)
        .and_then(|el| el.closest(&format!(".{CLOSE_CLASS}")).ok().flatten())
        .is_some()
}

fn element_of(event: &Event) -> Option<web_sys::Element> {
    event.target()?.dyn_into().ok()
}

/// Pointer position in viewport coordinates.
#[must_use]
pub fn pointer_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Current viewport size in CSS pixels. Zero if the window doesn't report it.
#[must_use]
pub fn viewport_size(window: &Window) -> Size {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

/// The popup's rendered size, measured from layout.
#[must_use]
pub fn measured_size(popup: &HtmlElement) -> Size {
    Size::new(f64::from(popup.offset_width()), f64::from(popup.offset_height()))
}
