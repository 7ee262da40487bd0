//! Fixed timestep animation step
//!
//! Advances the whole field deterministically. The external driver owns the
//! refresh loop, reads its control widgets into a [`TickInput`], and calls
//! [`tick`] once per interval; rendering the result is the caller's job.

use glam::Vec2;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use super::state::FieldState;
use crate::consts::{AGE_RATE, BOOST_FACTOR, DRIFT_SIGMA};
use crate::polar_to_cartesian;

/// Radial damping applied to the rotation rate
///
/// Both curves decrease with radius: inner stars sweep faster than outer
/// ones, winding the field up over time (differential rotation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum RotationCurve {
    /// 1 - r / (2 * bounds): rate falls off linearly toward the rim
    #[default]
    LinearFalloff,
    /// R / (r + 1): rate falls off with the inverse of the radius
    InverseRadius,
}

impl RotationCurve {
    /// Damping factor for a star at radius r
    #[inline]
    pub fn damping(self, r: f32, bounds: f32, disc_radius: f32) -> f32 {
        match self {
            RotationCurve::LinearFalloff => 1.0 - r / (bounds * 2.0),
            RotationCurve::InverseRadius => disc_radius / (r + 1.0),
        }
    }
}

/// External control readings for a single tick (deterministic)
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Rotation-speed slider, radians per second at unit damping
    pub rotation_speed: f32,
    /// Color-balance slider in [0, 1]; consumed at frame assembly
    pub color_balance: f32,
    /// Boost toggle; multiplies the effective speed by [`BOOST_FACTOR`]
    pub boost: bool,
    /// One-shot: drop both batches and spawn fresh ones
    pub reseed: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            rotation_speed: 0.4,
            color_balance: 0.5,
            boost: false,
            reseed: false,
        }
    }
}

/// Advance the field by one fixed timestep
pub fn tick(state: &mut FieldState, input: &TickInput, dt: f32) {
    if input.reseed {
        state.regenerate();
    }

    state.ticks += 1;

    let effective_speed = input.rotation_speed * if input.boost { BOOST_FACTOR } else { 1.0 };
    let bounds = state.config.bounds;
    let disc_radius = state.config.arms.outer_radius;
    let curve = state.config.curve;

    // Differential rotation; ages advance with the same effective speed, so
    // a stopped field does not dim
    for star in &mut state.stars {
        let damping = curve.damping(star.radius, bounds, disc_radius);
        star.theta += effective_speed * star.speed * damping * dt;
        star.pos = polar_to_cartesian(star.radius, star.theta);
        star.age += AGE_RATE * effective_speed * dt;
    }

    // Chaotic mote drift, recycling anything that left the visible region
    let limit = bounds * 2.0;
    for mote in &mut state.motes {
        let dx: f32 = state.rng.sample(StandardNormal);
        let dy: f32 = state.rng.sample(StandardNormal);
        mote.pos += Vec2::new(dx, dy) * (DRIFT_SIGMA * effective_speed * dt);

        if mote.pos.x.abs() > limit || mote.pos.y.abs() > limit {
            mote.pos = Vec2::new(
                state.rng.random_range(-bounds..bounds),
                state.rng.random_range(-bounds..bounds),
            );
        }
    }
}
