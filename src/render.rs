//! Popup rendering: the only module that mutates the overlay DOM element.
//!
//! Receives read-only engine state ([`PopupState`], categories) and applies
//! it to the single popup `<div>`. Content is built with `create_element`
//! and `text_content`, never raw HTML, so page-controlled attribute values
//! cannot inject markup.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`; the
//! bootstrap layer logs and drops them.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::engine::PopupState;
use crate::info::InfoCategory;
use crate::settings::Placement;

/// Class of the popup element, also used to recognize it in event targets.
pub const POPUP_CLASS: &str = "image-inspector-popup";

/// Class of the fixed-mode close button.
pub const CLOSE_CLASS: &str = "popup-close";

const STYLE_ID: &str = "image-inspector-style";

const STYLE_SHEET: &str = "
.image-inspector-popup {
  position: fixed;
  background: rgba(0, 0, 0, 0.95);
  color: white;
  padding: 12px;
  border-radius: 6px;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  font-size: 12px;
  z-index: 999999;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
  line-height: 1.5;
}
.image-inspector-popup.follow-mode {
  max-width: 250px;
  pointer-events: none;
}
.image-inspector-popup.fixed-mode {
  min-width: 250px;
  min-height: 150px;
  overflow-y: auto;
  border: 1px solid #555;
}
.popup-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 8px;
  padding-bottom: 8px;
  border-bottom: 1px solid #444;
}
.popup-title {
  color: #fff;
  font-weight: bold;
  font-size: 16px;
}
.popup-close {
  background: none;
  border: none;
  color: #aaa;
  cursor: pointer;
  font-size: 14px;
  padding: 0;
  width: 20px;
  height: 20px;
}
.popup-close:hover {
  color: #fff;
}
.popup-category {
  font-size: 14px;
  margin: 10px 0;
  padding-bottom: 10px;
  border-bottom: 1px solid #444;
}
.popup-category:last-child {
  border-bottom: none;
}
.popup-category-header {
  color: #fff;
  font-weight: bold;
  margin-bottom: 8px;
  font-size: 13px;
}
.popup-item {
  margin: 4px 0;
  word-break: break-all;
}
.popup-label {
  color: #aaa;
  font-weight: bold;
}
.popup-value {
  color: #fff;
  margin-left: 6px;
}
.popup-value a {
  color: #9cf;
}
";

/// Inject the popup stylesheet into `<head>` once.
///
/// # Errors
///
/// Returns `Err` if element creation or insertion fails.
pub fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLE_SHEET));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

/// Create the (hidden) popup element and attach it to `<body>`.
///
/// # Errors
///
/// Returns `Err` if element creation or insertion fails.
pub fn create_popup(document: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(POPUP_CLASS);
    el.style().set_property("display", "none")?;
    if let Some(body) = document.body() {
        body.append_child(&el)?;
    }
    Ok(el)
}

/// Apply the placement mode class and reset mode-specific inline sizing.
///
/// # Errors
///
/// Returns `Err` if a class or style mutation fails.
pub fn apply_mode(popup: &HtmlElement, placement: Placement) -> Result<(), JsValue> {
    let classes = popup.class_list();
    match placement {
        Placement::Follow => {
            classes.add_1("follow-mode")?;
            classes.remove_1("fixed-mode")?;
            // Follow mode auto-sizes to its content.
            popup.style().set_property("width", "auto")?;
            popup.style().set_property("height", "auto")?;
        }
        Placement::Fixed => {
            classes.add_1("fixed-mode")?;
            classes.remove_1("follow-mode")?;
        }
    }
    Ok(())
}

/// Replace the popup's content with a header plus the given categories.
///
/// # Errors
///
/// Returns `Err` if any element creation or insertion fails.
pub fn render_content(
    document: &Document,
    popup: &HtmlElement,
    categories: &[InfoCategory],
    placement: Placement,
) -> Result<(), JsValue> {
    popup.set_text_content(None);
    let header = build_header(document, placement)?;
    popup.append_child(&header)?;
    for category in categories {
        let block = build_category(document, category)?;
        popup.append_child(&block)?;
    }
    Ok(())
}

fn build_header(document: &Document, placement: Placement) -> Result<Element, JsValue> {
    let header = document.create_element("div")?;
    header.set_class_name("popup-header");

    let title = document.create_element("span")?;
    title.set_class_name("popup-title");
    title.set_text_content(Some(match placement {
        Placement::Follow => "Image Info",
        Placement::Fixed => "Image Inspector",
    }));
    header.append_child(&title)?;

    if placement == Placement::Fixed {
        let close = document.create_element("button")?;
        close.set_class_name(CLOSE_CLASS);
        close.set_text_content(Some("\u{2715}"));
        header.append_child(&close)?;
    }
    Ok(header)
}

fn build_category(document: &Document, category: &InfoCategory) -> Result<Element, JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name("popup-category");

    let header = document.create_element("div")?;
    header.set_class_name("popup-category-header");
    header.set_text_content(Some(category.title));
    container.append_child(&header)?;

    for item in &category.items {
        let row = document.create_element("div")?;
        row.set_class_name("popup-item");

        let label = document.create_element("span")?;
        label.set_class_name("popup-label");
        label.set_text_content(Some(&format!("{}:", item.label)));
        row.append_child(&label)?;

        let value = document.create_element("span")?;
        value.set_class_name("popup-value");
        if let Some(href) = &item.href {
            let anchor = document.create_element("a")?;
            anchor.set_attribute("href", href)?;
            anchor.set_attribute("target", "_blank")?;
            anchor.set_attribute("rel", "noopener")?;
            anchor.set_text_content(Some(&item.value));
            value.append_child(&anchor)?;
        } else {
            value.set_text_content(Some(&item.value));
        }
        row.append_child(&value)?;

        container.append_child(&row)?;
    }
    Ok(container)
}

/// Move the popup to the engine's position.
///
/// # Errors
///
/// Returns `Err` if a style mutation fails.
pub fn apply_position(popup: &HtmlElement, state: &PopupState) -> Result<(), JsValue> {
    let style = popup.style();
    style.set_property("left", &format!("{}px", state.position.x))?;
    style.set_property("top", &format!("{}px", state.position.y))?;
    Ok(())
}

/// Apply an explicit size after a fixed-mode resize.
///
/// # Errors
///
/// Returns `Err` if a style mutation fails.
pub fn apply_size(popup: &HtmlElement, state: &PopupState) -> Result<(), JsValue> {
    let style = popup.style();
    style.set_property("width", &format!("{}px", state.size.width))?;
    style.set_property("height", &format!("{}px", state.size.height))?;
    Ok(())
}

/// Show or hide the popup.
///
/// # Errors
///
/// Returns `Err` if a style mutation fails.
pub fn set_visible(popup: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    popup
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}
