//! Circular theme-wipe overlay, driven by the Web Animations API so it runs
//! on the browser's declarative timeline rather than the frame loop.
//!
//! The theme attribute commits only when the wipe completes; until then the
//! overlay (painted in the incoming background) masks the old theme while it
//! expands from the trigger point.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{ThemeEngine, ThemeMode, WipeTransition, WIPE_EASING};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::THEME_ATTR;

fn clip_keyframe(clip: &str) -> JsValue {
    let frame = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&frame, &"clipPath".into(), &clip.into());
    frame.into()
}

fn easing_css() -> String {
    let [x1, y1, x2, y2] = WIPE_EASING;
    format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
}

/// Start the reveal on `overlay` and commit the theme when it finishes.
///
/// The finish handler consults [`ThemeEngine::finish_toggle`], so a stale
/// callback from a cancelled animation cannot commit twice.
pub fn run(
    overlay: &web::HtmlElement,
    document: &web::Document,
    wipe: &WipeTransition,
    theme: Rc<RefCell<ThemeEngine>>,
    committed: ThemeMode,
) {
    let style = overlay.style();
    let _ = style.set_property("background-color", &wipe.background.to_hex());

    let (x, y) = (wipe.origin.x, wipe.origin.y);
    let frames = js_sys::Array::of2(
        &clip_keyframe(&format!("circle(0px at {x}px {y}px)")),
        &clip_keyframe(&format!("circle({r}px at {x}px {y}px)", r = wipe.cover_radius)),
    );

    let options = web::KeyframeAnimationOptions::new();
    options.set_duration(&JsValue::from_f64(wipe.duration_ms));
    options.set_easing(&easing_css());
    options.set_fill(web::FillMode::Forwards);

    let animation =
        overlay.animate_with_keyframe_animation_options(Some(frames.unchecked_ref()), &options);

    let document = document.clone();
    let overlay = overlay.clone();
    let animation_done = animation.clone();
    let finish = Closure::once(move || {
        if !theme.borrow_mut().finish_toggle() {
            return;
        }
        if let Some(body) = document.body() {
            let _ = body.set_attribute(THEME_ATTR, committed.as_str());
        }
        // Drop the fill-forwards effect, then collapse the overlay so the
        // now-committed page background shows through.
        animation_done.cancel();
        let _ = overlay.style().set_property("clip-path", "circle(0px at 0px 0px)");
    });
    animation.set_onfinish(Some(finish.as_ref().unchecked_ref()));
    finish.forget();
}
