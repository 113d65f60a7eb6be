// Host-side tests for hex parsing and color interpolation.

use drift_core::{hsla_css, Rgb};

#[test]
fn hex_round_trips_across_channel_sweep() {
    // Parsing a color's own hex form must reproduce it exactly.
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                let color = Rgb {
                    r: r as u8,
                    g: g as u8,
                    b: b as u8,
                };
                let parsed = Rgb::from_hex(&color.to_hex());
                assert_eq!(parsed, color, "round trip failed for {}", color.to_hex());
            }
        }
    }
}

#[test]
fn hex_parsing_is_case_insensitive() {
    assert_eq!(Rgb::from_hex("#AbCdEf"), Rgb::from_hex("#abcdef"));
    assert_eq!(
        Rgb::from_hex("#FFFFFF"),
        Rgb {
            r: 255,
            g: 255,
            b: 255
        }
    );
}

#[test]
fn shorthand_hex_expands_by_doubling() {
    assert_eq!(Rgb::from_hex("#0af"), Rgb::from_hex("#00aaff"));
    assert_eq!(Rgb::from_hex("fff"), Rgb::from_hex("#ffffff"));
    assert_eq!(
        Rgb::from_hex("#123"),
        Rgb {
            r: 0x11,
            g: 0x22,
            b: 0x33
        }
    );
}

#[test]
fn hash_prefix_is_optional() {
    assert_eq!(Rgb::from_hex("336699"), Rgb::from_hex("#336699"));
}

#[test]
fn malformed_hex_degrades_to_black() {
    for bad in ["", "#", "#12", "#12345", "#1234567", "#ggg", "zzzzzz", "#12x456", "héx"] {
        assert_eq!(Rgb::from_hex(bad), Rgb::BLACK, "expected black for {bad:?}");
    }
}

#[test]
fn lerp_hits_both_endpoints() {
    let a = Rgb { r: 10, g: 200, b: 0 };
    let b = Rgb {
        r: 250,
        g: 0,
        b: 128,
    };
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}

#[test]
fn lerp_midpoint_rounds_per_channel() {
    let a = Rgb { r: 0, g: 0, b: 0 };
    let b = Rgb {
        r: 255,
        g: 100,
        b: 1,
    };
    let mid = a.lerp(b, 0.5);
    assert_eq!(mid.r, 128); // 127.5 rounds up
    assert_eq!(mid.g, 50);
    assert_eq!(mid.b, 1); // 0.5 rounds up
}

#[test]
fn css_strings_have_expected_shape() {
    let c = Rgb {
        r: 17,
        g: 34,
        b: 51,
    };
    assert_eq!(c.css_rgba(0.2), "rgba(17, 34, 51, 0.2)");
    assert_eq!(c.to_hex(), "#112233");
    assert_eq!(hsla_css(120.0, 70.0, 60.0, 0.25), "hsla(120, 70%, 60%, 0.25)");
}
