//! Canvas 2D drawing for the particle field and blob.

use drift_core::{
    hsla_css, smooth_path, BlobShape, ParticleField, BLOB_ALPHA, BLOB_LIGHTNESS, BLOB_SATURATION,
};
use glam::Vec2;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

pub fn draw_particles(ctx: &web::CanvasRenderingContext2d, field: &ParticleField, alpha: f32) {
    for p in &field.particles {
        ctx.set_fill_style_str(&p.color().css_rgba(alpha));
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.close_path();
        ctx.fill();
    }
}

/// Fill the blob outline as a closed midpoint-smoothed curve with a
/// time-cycling two-stop linear gradient.
pub fn draw_blob(ctx: &web::CanvasRenderingContext2d, blob: &BlobShape, outline: &[Vec2]) {
    let Some(path) = smooth_path(outline) else {
        return;
    };

    let (mut min, mut max) = (outline[0], outline[0]);
    for p in outline {
        min = min.min(*p);
        max = max.max(*p);
    }
    let gradient = ctx.create_linear_gradient(min.x as f64, min.y as f64, max.x as f64, max.y as f64);
    let (h1, h2) = blob.gradient_hues();
    let _ = gradient.add_color_stop(0.0, &hsla_css(h1, BLOB_SATURATION, BLOB_LIGHTNESS, BLOB_ALPHA));
    let _ = gradient.add_color_stop(1.0, &hsla_css(h2, BLOB_SATURATION, BLOB_LIGHTNESS, BLOB_ALPHA));
    ctx.set_fill_style_canvas_gradient(&gradient);

    ctx.begin_path();
    ctx.move_to(path.start.x as f64, path.start.y as f64);
    for (ctrl, end) in &path.segments {
        ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, end.x as f64, end.y as f64);
    }
    ctx.close_path();
    ctx.fill();
}
