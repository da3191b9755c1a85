//! WASM entry point: wires page events to the overlay engine.
//!
//! Owns the single [`Overlay`] instance behind `Rc<RefCell<…>>` and installs
//! capture-phase document listeners that translate DOM events into
//! [`OverlayCore`] calls, then apply the returned [`Action`]s to the popup
//! element. Listener closures are leaked with `forget`; a content script
//! lives exactly as long as its page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, StorageEvent, Window};

use crate::dom;
use crate::engine::{Action, OverlayCore};
use crate::render;
use crate::storage;

/// Host side of the overlay: the engine plus the DOM handles it drives.
struct Overlay {
    core: OverlayCore,
    document: Document,
    popup: HtmlElement,
}

impl Overlay {
    /// Apply engine actions to the popup element.
    fn apply(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::ShowContent(categories) => {
                    let placement = self.core.settings.popup_position;
                    render::apply_mode(&self.popup, placement)?;
                    render::render_content(&self.document, &self.popup, &categories, placement)?;
                    render::apply_position(&self.popup, &self.core.popup)?;
                    render::set_visible(&self.popup, true)?;
                    // The popup auto-sizes to its content; report the real
                    // rendered size back so placement uses true dimensions.
                    let follow_up = self.core.set_measured_size(dom::measured_size(&self.popup));
                    self.apply(follow_up)?;
                }
                Action::Reposition(_) => render::apply_position(&self.popup, &self.core.popup)?,
                Action::Resize(_) => render::apply_size(&self.popup, &self.core.popup)?,
                Action::Hide => render::set_visible(&self.popup, false)?,
            }
        }
        Ok(())
    }
}

fn log_and_drop(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("popup update failed: {err:?}");
    }
}

/// Install a capture-phase mouse listener on the document.
fn on_mouse(
    document: &Document,
    kind: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback_and_bool(kind, cb.as_ref().unchecked_ref(), true)?;
    cb.forget();
    Ok(())
}

/// Entry point, invoked when the module is instantiated in the page.
///
/// # Errors
///
/// Returns `Err` if the initial DOM setup (stylesheet, popup element,
/// listener registration) fails.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    render::inject_styles(&document)?;
    let popup = render::create_popup(&document)?;

    let settings = storage::load_settings();
    log::info!("image inspector ready in {:?} mode", settings.popup_position);

    let core = OverlayCore::new(settings, dom::viewport_size(&window));
    let overlay = Rc::new(RefCell::new(Overlay {
        core,
        document: document.clone(),
        popup: popup.clone(),
    }));

    // Hover over an image shows the popup.
    {
        let overlay = Rc::clone(&overlay);
        on_mouse(&document, "mouseover", move |event| {
            let Some(img) = dom::image_from_event(&event) else {
                return;
            };
            let info = dom::image_info(&img);
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.pointer_over_image(&info, dom::pointer_point(&event));
            log_and_drop(overlay.apply(actions));
        })?;
    }

    // Pointer movement: follow tracking plus active drag/resize gestures.
    {
        let overlay = Rc::clone(&overlay);
        on_mouse(&document, "mousemove", move |event| {
            let over_image = dom::image_from_event(&event).is_some();
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.pointer_move(dom::pointer_point(&event), over_image);
            log_and_drop(overlay.apply(actions));
        })?;
    }

    // Leaving an image hides a follow-mode popup.
    {
        let overlay = Rc::clone(&overlay);
        on_mouse(&document, "mouseout", move |event| {
            if dom::image_from_event(&event).is_none() {
                return;
            }
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.pointer_out_image();
            log_and_drop(overlay.apply(actions));
        })?;
    }

    // Clicks: the close button first, then image clicks.
    {
        let overlay = Rc::clone(&overlay);
        on_mouse(&document, "click", move |event| {
            let mut overlay = overlay.borrow_mut();
            let actions = if dom::event_hits_close_button(&event) {
                overlay.core.close_requested()
            } else if dom::image_from_event(&event).is_some() {
                overlay.core.image_clicked()
            } else {
                return;
            };
            log_and_drop(overlay.apply(actions));
        })?;
    }

    // Pointer-down on the popup starts a drag or resize in fixed mode.
    {
        let overlay = Rc::clone(&overlay);
        let cb = Closure::wrap(Box::new(move |event: MouseEvent| {
            if dom::event_hits_close_button(&event) {
                return;
            }
            event.prevent_default();
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.pointer_down_on_popup(dom::pointer_point(&event));
            log_and_drop(overlay.apply(actions));
        }) as Box<dyn FnMut(MouseEvent)>);
        popup.add_event_listener_with_callback("mousedown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Pointer-up anywhere ends any gesture.
    {
        let overlay = Rc::clone(&overlay);
        on_mouse(&document, "mouseup", move |_event| {
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.pointer_up();
            log_and_drop(overlay.apply(actions));
        })?;
    }

    // Window resize re-clamps a visible popup.
    {
        let overlay = Rc::clone(&overlay);
        let window_for_resize: Window = window.clone();
        let cb = Closure::wrap(Box::new(move || {
            let viewport = dom::viewport_size(&window_for_resize);
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.viewport_resized(viewport);
            log_and_drop(overlay.apply(actions));
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Settings changes from other documents (options page, other tabs).
    {
        let overlay = Rc::clone(&overlay);
        let cb = Closure::wrap(Box::new(move |event: StorageEvent| {
            let Some(settings) = storage::settings_from_event(&event) else {
                return;
            };
            log::info!("settings changed: {:?} mode", settings.popup_position);
            let mut overlay = overlay.borrow_mut();
            let actions = overlay.core.apply_settings(settings);
            log_and_drop(overlay.apply(actions));
        }) as Box<dyn FnMut(StorageEvent)>);
        window.add_event_listener_with_callback("storage", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
