// Host-side tests for theme flags, persistence strings, and the wipe guard.

use drift_core::{
    cover_radius, AccentVariant, Rgb, ThemeEngine, ThemeMode, WIPE_DURATION_MS,
};
use glam::Vec2;

#[test]
fn mode_strings_round_trip() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
    }
    for accent in [AccentVariant::Default, AccentVariant::Alt] {
        assert_eq!(accent.as_str().parse::<AccentVariant>().unwrap(), accent);
    }
}

#[test]
fn unknown_strings_fail_to_parse() {
    assert!("midnight".parse::<ThemeMode>().is_err());
    assert!("".parse::<ThemeMode>().is_err());
    assert!("Dark".parse::<ThemeMode>().is_err(), "values are exact, not case-folded");
    assert!("alternate".parse::<AccentVariant>().is_err());
}

#[test]
fn toggling_twice_is_identity() {
    assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    assert_eq!(AccentVariant::Alt.toggled().toggled(), AccentVariant::Alt);
}

#[test]
fn palettes_invert_particles_against_background() {
    let light = ThemeMode::Light.palette();
    let dark = ThemeMode::Dark.palette();
    assert_eq!(light.particle, Rgb::BLACK);
    assert_eq!(
        dark.particle,
        Rgb {
            r: 255,
            g: 255,
            b: 255
        }
    );
    assert_ne!(light.background, dark.background);
    assert_eq!(light.particle_alpha, dark.particle_alpha);
}

#[test]
fn toggle_flips_mode_and_describes_the_wipe() {
    let mut engine = ThemeEngine::new(ThemeMode::Light, AccentVariant::Default);
    let origin = Vec2::new(900.0, 40.0);
    let viewport = Vec2::new(1000.0, 800.0);

    let wipe = engine
        .begin_toggle(origin, viewport)
        .expect("first toggle starts");
    assert_eq!(engine.mode(), ThemeMode::Dark);
    assert!(engine.in_transition());
    assert_eq!(wipe.origin, origin);
    assert_eq!(wipe.duration_ms, WIPE_DURATION_MS);
    assert_eq!(wipe.background, ThemeMode::Dark.palette().background);
}

#[test]
fn reentrant_toggles_are_ignored_until_finish() {
    let mut engine = ThemeEngine::new(ThemeMode::Light, AccentVariant::Default);
    let origin = Vec2::new(10.0, 10.0);
    let viewport = Vec2::new(640.0, 480.0);

    assert!(engine.begin_toggle(origin, viewport).is_some());
    // Rapid re-trigger while the wipe runs: no state change.
    assert!(engine.begin_toggle(origin, viewport).is_none());
    assert_eq!(engine.mode(), ThemeMode::Dark);

    assert!(engine.finish_toggle());
    // A second finish (cancelled animation callback) is a no-op.
    assert!(!engine.finish_toggle());

    // The guard is clear again; the next toggle proceeds.
    assert!(engine.begin_toggle(origin, viewport).is_some());
    assert_eq!(engine.mode(), ThemeMode::Light);
}

#[test]
fn accent_toggles_without_engaging_the_guard() {
    let mut engine = ThemeEngine::new(ThemeMode::Light, AccentVariant::Default);
    assert_eq!(engine.toggle_accent(), AccentVariant::Alt);
    assert!(!engine.in_transition());
    assert_eq!(engine.toggle_accent(), AccentVariant::Default);
}

#[test]
fn cover_radius_reaches_the_farthest_corner() {
    let viewport = Vec2::new(1000.0, 500.0);

    // From the center, the farthest corner is half the diagonal away.
    let center = Vec2::new(500.0, 250.0);
    let expected = (500.0_f32 * 500.0 + 250.0 * 250.0).sqrt();
    assert!((cover_radius(center, viewport) - expected).abs() < 1e-3);

    // From a corner, it is the full diagonal.
    let corner = Vec2::ZERO;
    let diagonal = (1000.0_f32 * 1000.0 + 500.0 * 500.0).sqrt();
    assert!((cover_radius(corner, viewport) - diagonal).abs() < 1e-3);

    // Property: every corner is covered, wherever the wipe starts.
    for ox in [0.0, 123.0, 500.0, 999.0] {
        for oy in [0.0, 77.0, 250.0, 499.0] {
            let origin = Vec2::new(ox, oy);
            let r = cover_radius(origin, viewport);
            for corner in [
                Vec2::ZERO,
                Vec2::new(viewport.x, 0.0),
                Vec2::new(0.0, viewport.y),
                viewport,
            ] {
                assert!(
                    origin.distance(corner) <= r + 1e-3,
                    "corner {corner:?} uncovered from {origin:?}"
                );
            }
        }
    }
}
