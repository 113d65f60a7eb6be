use std::cell::RefCell;
use std::rc::Rc;

use drift_core::ThemeEngine;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ACCENT_ATTR, ACCENT_TOGGLE_ID, THEME_TOGGLE_ID};
use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use crate::prefs;
use crate::wipe;

/// Track pointer movement at the window level in canvas pixel coordinates.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<input::PointerState>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.borrow_mut().pos = Some(input::pointer_canvas_px(&ev, &canvas));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing size synced to the viewport.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

pub struct ToggleWiring {
    pub document: web::Document,
    pub overlay: web::HtmlElement,
    pub theme: Rc<RefCell<ThemeEngine>>,
    pub frame: Rc<RefCell<FrameContext>>,
}

/// Theme toggle: retarget the particles immediately, persist the flag, and
/// let the wipe commit the DOM attribute when it completes.
pub fn wire_theme_toggle(w: ToggleWiring) {
    let Some(button) = w.document.get_element_by_id(THEME_TOGGLE_ID) else {
        log::warn!("missing #{THEME_TOGGLE_ID}; theme toggle disabled");
        return;
    };
    let button_for_origin = button.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let Some(window) = web::window() else { return };
        // The wipe grows from the toggle's center, which also covers
        // keyboard activation.
        let rect = button_for_origin.get_bounding_client_rect();
        let origin = Vec2::new(
            (rect.left() + rect.width() * 0.5) as f32,
            (rect.top() + rect.height() * 0.5) as f32,
        );
        let viewport = dom::viewport_size(&window);

        let Some(transition) = w.theme.borrow_mut().begin_toggle(origin, viewport) else {
            return;
        };
        let mode = w.theme.borrow().mode();
        log::info!("theme -> {}", mode.as_str());

        w.frame.borrow_mut().field.retarget(mode.palette().particle);
        prefs::store_mode(mode);
        wipe::run(&w.overlay, &w.document, &transition, w.theme.clone(), mode);
    }) as Box<dyn FnMut(_)>);
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Accent toggle: instant commit, no wipe.
pub fn wire_accent_toggle(document: &web::Document, theme: Rc<RefCell<ThemeEngine>>) {
    let doc = document.clone();
    dom::add_click_listener(document, ACCENT_TOGGLE_ID, move || {
        let accent = theme.borrow_mut().toggle_accent();
        prefs::store_accent(accent);
        if let Some(body) = doc.body() {
            let _ = body.set_attribute(ACCENT_ATTR, accent.as_str());
        }
    });
}
