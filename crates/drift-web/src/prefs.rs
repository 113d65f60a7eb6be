//! Preference storage: the two theme flags persist to `localStorage` and
//! survive reloads. Storage failures (private browsing, disabled storage)
//! degrade to defaults with a warning; nothing on this path is fatal.

use drift_core::{AccentVariant, ThemeMode, PREF_KEY_ACCENT, PREF_KEY_THEME};
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write(key: &str, value: &str) {
    match storage() {
        Some(s) => {
            if s.set_item(key, value).is_err() {
                log::warn!("could not persist {key}={value}");
            }
        }
        None => log::warn!("localStorage unavailable; {key} not persisted"),
    }
}

/// OS-level dark-mode signal, consulted only when no stored theme exists.
fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn load_mode() -> ThemeMode {
    if let Some(stored) = read(PREF_KEY_THEME) {
        match stored.parse::<ThemeMode>() {
            Ok(mode) => return mode,
            Err(e) => log::warn!("stored theme ignored: {e}"),
        }
    }
    if prefers_dark() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

pub fn load_accent() -> AccentVariant {
    match read(PREF_KEY_ACCENT) {
        Some(stored) => stored.parse::<AccentVariant>().unwrap_or_else(|e| {
            log::warn!("stored accent ignored: {e}");
            AccentVariant::default()
        }),
        None => AccentVariant::default(),
    }
}

pub fn store_mode(mode: ThemeMode) {
    write(PREF_KEY_THEME, mode.as_str());
}

pub fn store_accent(accent: AccentVariant) {
    write(PREF_KEY_ACCENT, accent.as_str());
}
