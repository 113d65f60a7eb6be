//! Hex color parsing and linear RGB interpolation.
//!
//! Colors on this layer are purely decorative, so parsing never fails:
//! anything that is not a valid 3- or 6-digit hex string degrades to black.

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parse a 3- or 6-digit hex color with an optional leading `#`.
    /// Shorthand digits double (`#0af` -> `#00aaff`); malformed input
    /// degrades to black.
    pub fn from_hex(hex: &str) -> Rgb {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: Vec<u8> = match digits.len() {
            3 => digits.bytes().flat_map(|d| [d, d]).collect(),
            6 => digits.bytes().collect(),
            _ => return Rgb::BLACK,
        };
        let channel = |i: usize| {
            let hi = (expanded[i] as char).to_digit(16)?;
            let lo = (expanded[i + 1] as char).to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        };
        match (channel(0), channel(2), channel(4)) {
            (Some(r), Some(g), Some(b)) => Rgb { r, g, b },
            _ => Rgb::BLACK,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation toward `to`. Callers keep `t` in [0, 1].
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
        }
    }

    /// CSS `rgba(...)` string for canvas fill styles.
    pub fn css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// CSS `hsla(...)` string; hue in degrees, saturation/lightness in percent.
pub fn hsla_css(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!("hsla({hue:.0}, {saturation:.0}%, {lightness:.0}%, {alpha})")
}
