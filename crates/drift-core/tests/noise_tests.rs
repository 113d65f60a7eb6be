// Host-side tests for the seeded simplex noise source.

use drift_core::NoiseSource;

// Deterministic sweep standing in for a fuzzer: irregular step so samples
// fall on both lattice triangles, plus some far-out coordinates.
fn sweep() -> Vec<(f32, f32)> {
    let mut inputs = Vec::new();
    let mut x = -43.0_f32;
    while x < 43.0 {
        let mut y = -43.0_f32;
        while y < 43.0 {
            inputs.push((x, y));
            y += 0.713;
        }
        x += 0.713;
    }
    inputs.extend([
        (0.0, 0.0),
        (1e4, -1e4),
        (-123456.78, 98765.43),
        (0.333, 1e6),
    ]);
    inputs
}

#[test]
fn output_stays_within_unit_interval() {
    let noise = NoiseSource::new(7);
    for (x, y) in sweep() {
        let v = noise.sample(x, y);
        assert!(
            (-1.0..=1.0).contains(&v),
            "noise({x}, {y}) = {v} out of [-1, 1]"
        );
    }
}

#[test]
fn same_seed_samples_identically() {
    let a = NoiseSource::new(42);
    let b = NoiseSource::new(42);
    for (x, y) in sweep() {
        assert_eq!(a.sample(x, y), b.sample(x, y), "divergence at ({x}, {y})");
    }
}

#[test]
fn different_seeds_produce_different_fields() {
    let a = NoiseSource::new(1);
    let b = NoiseSource::new(2);
    let differing = sweep()
        .iter()
        .filter(|(x, y)| a.sample(*x, *y) != b.sample(*x, *y))
        .count();
    assert!(differing > 0, "seeds 1 and 2 produced identical fields");
}

#[test]
fn field_is_not_constant() {
    let noise = NoiseSource::new(3);
    let first = noise.sample(0.1, 0.2);
    let varies = sweep().iter().any(|(x, y)| noise.sample(*x, *y) != first);
    assert!(varies, "noise field is flat");
}

#[test]
fn nearby_samples_stay_close() {
    // Gradient noise is continuous; a tiny input step cannot jump far.
    let noise = NoiseSource::new(11);
    let mut t = 0.0_f32;
    while t < 20.0 {
        let a = noise.sample(t, t * 0.7);
        let b = noise.sample(t + 1e-3, t * 0.7 + 1e-3);
        assert!(
            (a - b).abs() < 0.05,
            "discontinuity near t={t}: {a} vs {b}"
        );
        t += 0.173;
    }
}
