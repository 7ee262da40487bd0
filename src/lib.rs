//! Galaxia - procedural spiral-galaxy and nebula point fields
//!
//! Core modules:
//! - `field`: Deterministic point-field generation and animation stepping
//! - `color`: Scalar-to-color and marker-size mapping
//! - `frame`: Renderer-ready instance buffers (positions, colors, sizes)
//! - `settings`: Persisted configuration and detail presets
//!
//! The crate never renders anything itself. An external animation driver
//! calls [`field::tick()`] once per refresh interval and hands the resulting
//! [`frame::RenderFrame`] to whatever scatter renderer it owns.

pub mod color;
pub mod field;
pub mod frame;
pub mod settings;

pub use field::{FieldState, TickInput, tick};
pub use settings::{DetailPreset, Settings};

use glam::Vec2;

/// Field configuration constants
pub mod consts {
    /// Fixed animation timestep (20 Hz, one tick per 50 ms driver interval)
    pub const TICK_DT: f32 = 1.0 / 20.0;

    /// Default galaxy disc radius
    pub const GALAXY_RADIUS: f32 = 10.0;
    /// Default half-extent of the visible simulation region
    pub const SIMULATION_BOUNDS: f32 = 15.0;

    /// Guard against ln(0) in the spiral-arm parametrization
    pub const LOG_EPSILON: f32 = 1e-5;

    /// Temperature range accepted by the color mapper (Kelvin)
    pub const TEMP_MIN: f32 = 1000.0;
    pub const TEMP_MAX: f32 = 40000.0;

    /// Speed multiplier while the boost toggle is active
    pub const BOOST_FACTOR: f32 = 3.8;
    /// Decay base raised to a point's age (progressive dimming)
    pub const EROSION_FACTOR: f32 = 0.98;
    /// Age gained per tick per unit of effective speed
    pub const AGE_RATE: f32 = 0.001;
    /// Standard deviation of per-tick nebula drift
    pub const DRIFT_SIGMA: f32 = 0.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
