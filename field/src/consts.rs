//! Shared numeric constants for the particle field.

// ── Particle set ────────────────────────────────────────────────

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 500;

/// Half-width of the x and z spawn range (x, z ∈ [-5, 5)).
pub const HALF_SPREAD_XZ: f64 = 5.0;

/// Lower bound of the y column. Particles falling below it wrap to the top.
pub const Y_MIN: f64 = -10.0;

/// Upper bound of the y column.
pub const Y_MAX: f64 = 10.0;

/// Height of the y column.
pub const Y_SPAN: f64 = Y_MAX - Y_MIN;

/// Distance each particle falls per frame, in world units.
pub const FALL_STEP: f64 = 0.01;

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Near clipping plane distance.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane distance.
pub const CAMERA_FAR: f64 = 1000.0;

/// Camera position on the z axis, looking toward the origin.
pub const CAMERA_Z: f64 = 5.0;

// ── Material ────────────────────────────────────────────────────

/// Particle colour.
pub const PARTICLE_COLOR: &str = "#22c55e";

/// Particle edge length in world units, attenuated by distance.
pub const PARTICLE_SIZE: f64 = 0.05;

/// Particle opacity.
pub const PARTICLE_OPACITY: f64 = 0.7;
