#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{BlobShape, ParticleField, ThemeEngine, BLOB_VERTICES};
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod prefs;
mod render;
mod wipe;

use constants::{ACCENT_ATTR, BLOB_RADIUS_FRACTION, CANVAS_ID, OVERLAY_ID, THEME_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Per-load seed for particle placement and the blob's noise field.
fn page_seed() -> u64 {
    let r = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    r ^ (js_sys::Date::now() as u64)
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let overlay: web::HtmlElement = document
        .get_element_by_id(OVERLAY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{OVERLAY_ID}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);
    let ctx = dom::canvas_context_2d(&canvas)?;

    // Resolve persisted theme flags and commit them without animation;
    // the wipe only masks later toggles.
    let mode = prefs::load_mode();
    let accent = prefs::load_accent();
    if let Some(body) = document.body() {
        let _ = body.set_attribute(THEME_ATTR, mode.as_str());
        let _ = body.set_attribute(ACCENT_ATTR, accent.as_str());
    }
    let theme = Rc::new(RefCell::new(ThemeEngine::new(mode, accent)));

    let seed = page_seed();
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    // The field takes its starting color as an explicit parameter; it never
    // reads preference storage itself.
    let field = ParticleField::new(width, height, mode.palette().particle, seed);
    log::info!(
        "[field] {}x{} px, {} particles, theme={}",
        width,
        height,
        field.particles.len(),
        mode.as_str()
    );

    let blob = BlobShape::new(
        Vec2::new(width * 0.5, height * 0.5),
        width.min(height) * BLOB_RADIUS_FRACTION,
        BLOB_VERTICES,
        seed ^ 0x9E37_79B9_7F4A_7C15,
    );

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_pointer_tracking(&canvas, pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        theme: theme.clone(),
        field,
        blob,
        pointer: pointer.clone(),
        canvas: canvas.clone(),
        ctx,
        frames: 0,
        last_report: Instant::now(),
    }));

    events::wire_theme_toggle(events::ToggleWiring {
        document: document.clone(),
        overlay,
        theme: theme.clone(),
        frame: frame_ctx.clone(),
    });
    events::wire_accent_toggle(&document, theme);

    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
