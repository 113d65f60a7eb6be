use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{BlobShape, ParticleField, ThemeEngine};
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FPS_LOG_INTERVAL;
use crate::input;
use crate::render;

pub struct FrameContext {
    pub theme: Rc<RefCell<ThemeEngine>>,
    pub field: ParticleField,
    pub blob: BlobShape,
    pub pointer: Rc<RefCell<input::PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub frames: u32,
    pub last_report: Instant,
}

impl FrameContext {
    /// One animation tick: sync bounds, step the simulation, then draw.
    /// Update always precedes draw so the frame shows the freshest state.
    pub fn frame(&mut self) {
        self.resize_if_needed();

        let pointer = self.pointer.borrow().pos;
        self.field.step(pointer);
        self.blob.step();

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        render::clear(&self.ctx, w, h);
        render::draw_blob(&self.ctx, &self.blob, &self.blob.outline(pointer));
        let alpha = self.theme.borrow().mode().palette().particle_alpha;
        render::draw_particles(&self.ctx, &self.field, alpha);

        self.frames += 1;
        if self.frames % FPS_LOG_INTERVAL == 0 {
            let elapsed = self.last_report.elapsed().as_secs_f32();
            if elapsed > 0.0 {
                log::debug!("{:.1} fps", FPS_LOG_INTERVAL as f32 / elapsed);
            }
            self.last_report = Instant::now();
        }
    }

    // The resize listener only adjusts the canvas backing store; the field
    // picks the new bounds up here on the next tick. Particles left outside
    // re-wrap on their own.
    fn resize_if_needed(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        if w != self.field.width() || h != self.field.height() {
            self.field.resize(w, h);
            self.blob.set_center(Vec2::new(w * 0.5, h * 0.5));
        }
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame`, rescheduling
/// itself each tick.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
