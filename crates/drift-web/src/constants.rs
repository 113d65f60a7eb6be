// DOM wiring constants for the web frontend.

pub const CANVAS_ID: &str = "backdrop-canvas";
pub const OVERLAY_ID: &str = "wipe-overlay";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const ACCENT_TOGGLE_ID: &str = "accent-toggle";

pub const THEME_ATTR: &str = "data-theme";
pub const ACCENT_ATTR: &str = "data-accent";

// Blob placement relative to the viewport's smaller dimension.
pub const BLOB_RADIUS_FRACTION: f32 = 0.22;

// Frame timing log cadence (frames).
pub const FPS_LOG_INTERVAL: u32 = 300;
