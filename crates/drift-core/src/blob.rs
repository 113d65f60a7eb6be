//! Noise-deformed blob: a ring of control points whose radius wobbles with
//! a seeded noise field and bends toward the pointer, rendered as a closed
//! smooth curve with a time-cycling gradient.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{
    BLOB_HUE_OFFSET, BLOB_HUE_RATE, BLOB_NOISE_STRENGTH, BLOB_POINTER_GAIN, BLOB_POINTER_MAX_DIST,
    BLOB_SPATIAL_SCALE, BLOB_TIME_STEP,
};
use crate::noise::NoiseSource;

pub type Outline = SmallVec<[Vec2; 16]>;

pub struct BlobShape {
    noise: NoiseSource,
    center: Vec2,
    base_radius: f32,
    vertex_count: usize,
    time: f32,
}

impl BlobShape {
    pub fn new(center: Vec2, base_radius: f32, vertex_count: usize, seed: u64) -> Self {
        Self {
            noise: NoiseSource::new(seed),
            center,
            base_radius,
            vertex_count,
            time: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Re-anchor after a viewport resize.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the animation clock by one frame.
    pub fn step(&mut self) {
        self.time += BLOB_TIME_STEP;
    }

    /// Perturbed control-point ring for the current frame.
    ///
    /// Pointer attraction is gated on the distance to the *unperturbed*
    /// point position, so the pull does not flicker with the noise wobble.
    pub fn outline(&self, pointer: Option<Vec2>) -> Outline {
        let mut points = Outline::new();
        for i in 0..self.vertex_count {
            let angle = i as f32 / self.vertex_count as f32 * std::f32::consts::TAU;
            let dir = Vec2::new(angle.cos(), angle.sin());
            let wobble = self.noise.sample(
                dir.x * BLOB_SPATIAL_SCALE + self.time,
                dir.y * BLOB_SPATIAL_SCALE + self.time,
            );
            let mut point = self.center + dir * (self.base_radius + wobble * BLOB_NOISE_STRENGTH);
            if let Some(p) = pointer {
                let rest = self.center + dir * self.base_radius;
                let dist = rest.distance(p);
                if dist < BLOB_POINTER_MAX_DIST {
                    let force = (BLOB_POINTER_MAX_DIST - dist) / BLOB_POINTER_MAX_DIST;
                    point += (p - point) * force * BLOB_POINTER_GAIN;
                }
            }
            points.push(point);
        }
        points
    }

    /// Hue pair for the gradient fill; both stops cycle with the clock.
    pub fn gradient_hues(&self) -> (f32, f32) {
        let h1 = (self.time * BLOB_HUE_RATE).rem_euclid(360.0);
        (h1, (h1 + BLOB_HUE_OFFSET).rem_euclid(360.0))
    }
}

/// Closed smooth path through a control ring.
///
/// Starts at the midpoint of the first edge, then one quadratic segment per
/// control point: the point is the control, the midpoint to the next point
/// is the endpoint. Needs at least three points to enclose area.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothPath {
    pub start: Vec2,
    /// `(control, end)` pairs for quadratic curve segments.
    pub segments: SmallVec<[(Vec2, Vec2); 16]>,
}

pub fn smooth_path(points: &[Vec2]) -> Option<SmoothPath> {
    if points.len() < 3 {
        return None;
    }
    let mid = |a: Vec2, b: Vec2| (a + b) * 0.5;
    let start = mid(points[0], points[1]);
    let mut segments = SmallVec::new();
    for i in 1..=points.len() {
        let ctrl = points[i % points.len()];
        let end = mid(ctrl, points[(i + 1) % points.len()]);
        segments.push((ctrl, end));
    }
    Some(SmoothPath { start, segments })
}
