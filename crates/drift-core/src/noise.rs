//! Seeded 2D simplex gradient noise, used to deform the blob silhouette.

use rand::prelude::*;
use rand::rngs::StdRng;

// Skew/unskew factors for the 2D triangular lattice.
const F2: f32 = 0.366_025_4; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

// Empirical scale that keeps the summed corner contributions within [-1, 1].
const NORMALIZATION: f32 = 70.0;

// 2D projections of the 12 simplex boundary gradients.
const GRADIENTS: [[f32; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Smooth pseudo-random scalar field over continuous 2D coordinates.
///
/// Construction is seeded so two sources built from the same seed sample
/// identically; callers that want a fresh field per page load pass a
/// fresh seed.
pub struct NoiseSource {
    // 256-entry permutation mirrored to 512 so corner lookups never wrap.
    perm: [u8; 512],
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = core::array::from_fn(|i| i as u8);
        table.shuffle(&mut StdRng::seed_from_u64(seed));
        let perm = core::array::from_fn(|i| table[i & 255]);
        Self { perm }
    }

    /// Sample the field at `(x, y)`. Output stays within [-1, 1].
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        // Skew input space onto the integer lattice and find the cell origin.
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew back to get the displacement from the cell origin.
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Which of the cell's two triangles contains the point.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let gi0 = self.perm[ii + self.perm[jj] as usize] as usize % 12;
        let gi1 = self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize % 12;
        let gi2 = self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize % 12;

        let n = corner(x0, y0, GRADIENTS[gi0])
            + corner(x1, y1, GRADIENTS[gi1])
            + corner(x2, y2, GRADIENTS[gi2]);
        n * NORMALIZATION
    }
}

// Radially-weighted contribution of one simplex corner.
#[inline]
fn corner(x: f32, y: f32, grad: [f32; 2]) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * (grad[0] * x + grad[1] * y)
    }
}
