// Shared simulation tuning constants used by both the core and the web frontend.

// Particle field sizing
pub const AREA_PER_PARTICLE: f32 = 15_000.0; // one particle per this many square pixels
pub const MAX_PARTICLES: usize = 150; // hard cap, large viewports stop scaling here

// Particle motion
pub const REPULSION_RADIUS: f32 = 150.0; // pointer influence radius, canvas px
pub const EASE_DIVISOR: f32 = 20.0; // fraction of the anchor offset recovered per frame
pub const DRIFT_SPEED: f32 = 0.25; // per-axis velocity range is [-DRIFT_SPEED, DRIFT_SPEED]
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 3.0;
pub const DENSITY_MIN: f32 = 1.0; // repulsion force multiplier range
pub const DENSITY_MAX: f32 = 31.0;

// Color transitions
pub const COLOR_MIX_STEP: f32 = 0.05; // a retarget completes in exactly 20 frames

// Blob geometry and animation
pub const BLOB_VERTICES: usize = 8;
pub const BLOB_TIME_STEP: f32 = 0.005; // clock advance per frame
pub const BLOB_SPATIAL_SCALE: f32 = 1.5; // maps the control ring onto noise space
pub const BLOB_NOISE_STRENGTH: f32 = 40.0; // max radius perturbation, canvas px
pub const BLOB_POINTER_MAX_DIST: f32 = 200.0; // pointer attraction radius, canvas px
pub const BLOB_POINTER_GAIN: f32 = 0.1;

// Blob gradient fill
pub const BLOB_HUE_RATE: f32 = 50.0; // degrees of hue per unit of blob time
pub const BLOB_HUE_OFFSET: f32 = 60.0; // second gradient stop leads the first by this
pub const BLOB_SATURATION: f32 = 70.0;
pub const BLOB_LIGHTNESS: f32 = 60.0;
pub const BLOB_ALPHA: f32 = 0.25;

// Theme wipe transition
pub const WIPE_DURATION_MS: f64 = 600.0;
pub const WIPE_EASING: [f32; 4] = [0.645, 0.045, 0.355, 1.0]; // cubic-bezier control points

// Preference storage keys
pub const PREF_KEY_THEME: &str = "theme";
pub const PREF_KEY_ACCENT: &str = "accent";
