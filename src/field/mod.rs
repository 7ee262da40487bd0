//! Deterministic point-field module
//!
//! Generation and animation both live here and must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Whole-batch spawning and replacement, never per-point teardown
//! - No rendering or platform dependencies

pub mod density;
pub mod spiral;
pub mod state;
pub mod tick;

pub use density::{DensityConfig, DensityMap};
pub use spiral::{
    RadialProfile, SpiralArmConfig, snap_to_arms, spawn_arm_points, spawn_arm_points_3d,
    spawn_bulge, spawn_bulge_3d,
};
pub use state::{FieldState, GalaxyConfig, Mote, Star};
pub use tick::{RotationCurve, TickInput, tick};
