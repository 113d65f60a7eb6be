//! Pointer-reactive drifting particle field.
//!
//! Each particle carries its own color-transition state, so a theme change
//! blends per particle over the following frames instead of repainting.

use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::color::Rgb;
use crate::constants::{
    AREA_PER_PARTICLE, COLOR_MIX_STEP, DENSITY_MAX, DENSITY_MIN, DRIFT_SPEED, EASE_DIVISOR,
    MAX_PARTICLES, REPULSION_RADIUS, SIZE_MAX, SIZE_MIN,
};

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Drift anchor the particle eases back toward; advances with `vel`.
    pub base: Vec2,
    pub size: f32,
    /// Per-particle repulsion force multiplier.
    pub density: f32,
    current: Rgb,
    target: Rgb,
    mix: f32,
}

impl Particle {
    pub fn spawn(rng: &mut StdRng, width: f32, height: f32, color: Rgb) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        Self {
            pos,
            vel: Vec2::new(
                rng.gen_range(-DRIFT_SPEED..DRIFT_SPEED),
                rng.gen_range(-DRIFT_SPEED..DRIFT_SPEED),
            ),
            base: pos,
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            density: rng.gen_range(DENSITY_MIN..DENSITY_MAX),
            current: color,
            target: color,
            mix: 0.0,
        }
    }

    /// Interpolated color at the current transition fraction.
    pub fn color(&self) -> Rgb {
        self.current.lerp(self.target, self.mix)
    }

    /// Transition progress in [0, 1].
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Begin blending toward a new color. `current` freezes at the color on
    /// screen right now, so a retarget mid-transition never jumps.
    pub fn retarget(&mut self, new: Rgb) {
        self.current = self.current.lerp(self.target, self.mix);
        self.target = new;
        self.mix = 0.0;
    }

    /// Advance one frame: pointer repulsion or anchor easing, constant
    /// drift, edge wrap, color-mix step.
    pub fn update(&mut self, width: f32, height: f32, pointer: Option<Vec2>) {
        let repelled = match pointer {
            Some(p) => {
                let away = self.pos - p;
                let dist = away.length();
                if dist < REPULSION_RADIUS {
                    // A coincident pointer has no direction; apply no force.
                    if dist > 0.0 {
                        let force = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
                        self.pos += away / dist * force * self.density;
                    }
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if !repelled {
            self.pos -= (self.pos - self.base) / EASE_DIVISOR;
        }

        self.pos += self.vel;
        self.base += self.vel;

        // Re-enter on the opposite edge; the anchor snaps with the particle.
        if width > 0.0 && (self.pos.x < 0.0 || self.pos.x >= width) {
            self.pos.x = self.pos.x.rem_euclid(width);
            self.base.x = self.pos.x;
        }
        if height > 0.0 && (self.pos.y < 0.0 || self.pos.y >= height) {
            self.pos.y = self.pos.y.rem_euclid(height);
            self.base.y = self.pos.y;
        }

        self.mix = (self.mix + COLOR_MIX_STEP).min(1.0);
    }
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Particle budget for a viewport: one per `AREA_PER_PARTICLE` square
    /// pixels, floored, capped at `MAX_PARTICLES`.
    pub fn particle_count(width: f32, height: f32) -> usize {
        let budget = (width * height / AREA_PER_PARTICLE).floor();
        (budget as usize).min(MAX_PARTICLES)
    }

    pub fn new(width: f32, height: f32, color: Rgb, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..Self::particle_count(width, height))
            .map(|_| Particle::spawn(&mut rng, width, height, color))
            .collect::<Vec<_>>();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Record new bounds. Existing particles are left where they are; the
    /// wrap logic in `Particle::update` folds strays back in over the next
    /// frames.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Fan a new target color out to every particle.
    pub fn retarget(&mut self, color: Rgb) {
        for p in &mut self.particles {
            p.retarget(color);
        }
    }

    /// Advance every particle one frame. Callers draw after stepping so the
    /// rendered frame reflects the freshest state.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.update(w, h, pointer);
        }
    }
}
