/// Tuning constants for sampling, smoothing, idle drift and the stripe overlay.
///
/// These express intended behavior (time constants, clamp limits, stripe
/// geometry) and keep magic numbers out of the code.

// Idle detection
pub const IDLE_TIMEOUT_MS: f64 = 1400.0;

// Per-channel smoothing constants (fraction of remaining error closed per tick)
pub const ROTATION_SMOOTHING: f32 = 0.12;
pub const POSITION_SMOOTHING: f32 = 0.18;
pub const TRANSLATE_SMOOTHING: f32 = 0.18;
pub const SCALE_SMOOTHING: f32 = 0.14;
pub const HOVER_SMOOTHING: f32 = 0.18;
pub const PROXIMITY_SMOOTHING: f32 = 0.18;
pub const LIGHT_ANGLE_SMOOTHING: f32 = 0.16;
pub const LIGHT_STRENGTH_SMOOTHING: f32 = 0.2;

// Pointer mapping
pub const LIGHT_RADIUS: f32 = 0.65; // distance from center at which light strength reaches zero
pub const TRANSLATE_MAX_PX: f32 = 12.0; // parallax shift at the viewport edge
pub const ACTIVE_SCALE_LIFT: f32 = 0.03; // scale gain with the pointer at the center

// Idle orbit (angular frequencies in rad/s, amplitudes as fractions)
pub const ORBIT_FREQ_RY: f32 = 0.6;
pub const ORBIT_FREQ_RX: f32 = 0.5;
pub const ORBIT_FREQ_MX: f32 = 0.55;
pub const ORBIT_FREQ_MY: f32 = 0.45;
pub const ORBIT_TILT_Y_SHARE: f32 = 0.35;
pub const ORBIT_TILT_X_SHARE: f32 = 0.3;
pub const ORBIT_LIGHT_X_AMPLITUDE: f32 = 0.25;
pub const ORBIT_LIGHT_Y_AMPLITUDE: f32 = 0.2;
pub const IDLE_HOVER: f32 = 0.6;

// Looks that enable the prism overlay push its strength to at least this value
pub const PRISM_STRENGTH_FLOOR: f32 = 1.2;

// Stripe overlay geometry
pub const STRIPE_STEP_PER_DENSITY: f32 = 8.0;
pub const STRIPE_MIN_STEP: f32 = 48.0; // step at the lowest panel density
pub const STRIPE_OFFSET_X: f32 = 0.3; // candidate center offset as a fraction of the step
pub const STRIPE_OFFSET_Y: f32 = 0.7;
pub const STRIPE_MIN_PROXIMITY: f32 = 0.5;
pub const STRIPE_MIN_ALPHA: f32 = 0.02;
pub const STRIPE_MIN_LENGTH: f32 = 50.0;
pub const STRIPE_LENGTH_PER_DENSITY: f32 = 10.0;
pub const STRIPE_MIN_WIDTH: f32 = 1.2;
pub const STRIPE_WIDTH_PER_DENSITY: f32 = 0.25;
pub const STRIPE_ANGLE_RAD: f32 = -std::f32::consts::FRAC_PI_4;

// Stripe alpha mapping
pub const STRIPE_ALPHA_BASE: f32 = 0.12;
pub const STRIPE_ALPHA_STRENGTH: f32 = 0.55;
pub const STRIPE_HOVER_BASE: f32 = 0.3;
pub const STRIPE_HOVER_SPAN: f32 = 0.7;
