//! Theme state: light/dark mode, accent variant, and the wipe-transition
//! protocol that guards against overlapping toggles.

use std::str::FromStr;

use glam::Vec2;
use thiserror::Error;

use crate::color::Rgb;
use crate::constants::WIPE_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Independent secondary accent toggle, orthogonal to [`ThemeMode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccentVariant {
    #[default]
    Default,
    Alt,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized theme value `{0}`")]
pub struct ThemeParseError(String);

/// Theme-dependent colors consumed by the canvas layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub particle: Rgb,
    pub particle_alpha: f32,
}

const LIGHT_PALETTE: Palette = Palette {
    background: Rgb {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    },
    particle: Rgb { r: 0, g: 0, b: 0 },
    particle_alpha: 0.2,
};

const DARK_PALETTE: Palette = Palette {
    background: Rgb {
        r: 0x11,
        g: 0x11,
        b: 0x11,
    },
    particle: Rgb {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    },
    particle_alpha: 0.2,
};

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

impl AccentVariant {
    pub fn toggled(self) -> Self {
        match self {
            AccentVariant::Default => AccentVariant::Alt,
            AccentVariant::Alt => AccentVariant::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccentVariant::Default => "default",
            AccentVariant::Alt => "alt",
        }
    }
}

impl FromStr for AccentVariant {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AccentVariant::Default),
            "alt" => Ok(AccentVariant::Alt),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Everything the frontend needs to run one circular reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WipeTransition {
    /// Reveal center in viewport coordinates (the trigger point).
    pub origin: Vec2,
    /// Final radius: reaches the farthest viewport corner from `origin`.
    pub cover_radius: f32,
    pub duration_ms: f64,
    /// Background the overlay reveals (the incoming theme's).
    pub background: Rgb,
}

/// Distance from `origin` to the farthest corner of a `viewport`-sized rect.
pub fn cover_radius(origin: Vec2, viewport: Vec2) -> f32 {
    let dx = origin.x.max(viewport.x - origin.x);
    let dy = origin.y.max(viewport.y - origin.y);
    Vec2::new(dx, dy).length()
}

pub struct ThemeEngine {
    mode: ThemeMode,
    accent: AccentVariant,
    in_transition: bool,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode, accent: AccentVariant) -> Self {
        Self {
            mode,
            accent,
            in_transition: false,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn accent(&self) -> AccentVariant {
        self.accent
    }

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Flip light/dark and describe the wipe that masks the switch.
    /// Returns `None` while a previous wipe is still running.
    pub fn begin_toggle(&mut self, origin: Vec2, viewport: Vec2) -> Option<WipeTransition> {
        if self.in_transition {
            log::debug!("theme toggle ignored; wipe in flight");
            return None;
        }
        self.in_transition = true;
        self.mode = self.mode.toggled();
        Some(WipeTransition {
            origin,
            cover_radius: cover_radius(origin, viewport),
            duration_ms: WIPE_DURATION_MS,
            background: self.mode.palette().background,
        })
    }

    /// Clear the transition guard. Returns `false` when no wipe was pending,
    /// so a finish handler that fires after cancellation becomes a no-op.
    pub fn finish_toggle(&mut self) -> bool {
        std::mem::take(&mut self.in_transition)
    }

    /// Accent flips immediately: no wipe, no guard.
    pub fn toggle_accent(&mut self) -> AccentVariant {
        self.accent = self.accent.toggled();
        self.accent
    }
}
