//! Field state and batch spawning
//!
//! Everything needed for deterministic resume lives here. Stars and motes
//! are created in whole batches and replaced in whole batches; no point is
//! ever destroyed individually.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spiral::{self, RadialProfile, SpiralArmConfig};
use super::tick::RotationCurve;
use crate::consts::SIMULATION_BOUNDS;
use crate::{cartesian_to_polar, color, polar_to_cartesian};

/// A single star on the disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Distance from the galactic center (fixed for the batch's lifetime)
    pub radius: f32,
    /// Current angle in radians; never normalized, only cos/sin are consumed
    pub theta: f32,
    /// Cartesian position, recomputed from (radius, theta) every tick
    pub pos: Vec2,
    /// Per-point angular-speed multiplier
    pub speed: f32,
    /// Surface temperature in Kelvin
    pub temperature: f32,
    /// Marker size before age decay
    pub base_size: f32,
    /// Monotonic age driving size/opacity decay; starts at exactly 0.0
    pub age: f32,
}

/// A nebula mote, drifting freely across the visible region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mote {
    pub pos: Vec2,
    pub base_size: f32,
    pub alpha: f32,
}

/// Population sizes and shape of one generated galaxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyConfig {
    /// Stars placed along the spiral arms
    pub star_count: usize,
    /// Stars in the central bulge
    pub bulge_count: usize,
    /// Drifting nebula motes
    pub mote_count: usize,
    /// Arm layout
    pub arms: SpiralArmConfig,
    /// Radial distribution of arm stars
    pub profile: RadialProfile,
    /// Differential-rotation damping curve
    pub curve: RotationCurve,
    /// Half-extent of the visible region
    pub bounds: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: 2000,
            bulge_count: 500,
            mote_count: 2000,
            arms: SpiralArmConfig::default(),
            profile: RadialProfile::Uniform,
            curve: RotationCurve::default(),
            bounds: SIMULATION_BOUNDS,
        }
    }
}

/// Complete animation state (deterministic, serializable)
///
/// The live RNG is part of the state so a reloaded snapshot resumes
/// bit-identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldState {
    /// Seed the field was created from
    pub seed: u64,
    /// Seeded RNG; the only source of randomness after construction
    pub rng: Pcg32,
    /// Tick counter
    pub ticks: u64,
    /// Shape the batches were spawned from
    pub config: GalaxyConfig,
    /// Star batch
    pub stars: Vec<Star>,
    /// Nebula batch
    pub motes: Vec<Mote>,
}

impl FieldState {
    /// Create a field with freshly spawned batches
    pub fn new(seed: u64, config: GalaxyConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn_stars(&mut rng, &config);
        let motes = spawn_motes(&mut rng, &config);
        log::info!(
            "Spawned {} stars and {} motes (seed {seed})",
            stars.len(),
            motes.len()
        );

        Self {
            seed,
            rng,
            ticks: 0,
            config,
            stars,
            motes,
        }
    }

    /// Replace both batches in place, continuing the RNG stream
    pub fn regenerate(&mut self) {
        self.stars = spawn_stars(&mut self.rng, &self.config);
        self.motes = spawn_motes(&mut self.rng, &self.config);
        log::info!("Regenerated field at tick {}", self.ticks);
    }
}

/// Spawn the full star batch: spiral arms plus central bulge
fn spawn_stars<R: Rng>(rng: &mut R, cfg: &GalaxyConfig) -> Vec<Star> {
    let mut points = spiral::spawn_arm_points(rng, &cfg.arms, cfg.star_count, cfg.profile);
    points.extend(
        spiral::spawn_bulge(rng, cfg.bulge_count, cfg.arms.inner_radius)
            .into_iter()
            .map(cartesian_to_polar),
    );

    let max_radius = cfg.arms.outer_radius;
    points
        .into_iter()
        .map(|(radius, theta)| {
            let temperature = color::temperature_for_radius(rng, radius, max_radius);
            Star {
                radius,
                theta,
                pos: polar_to_cartesian(radius, theta),
                speed: rng.random_range(0.5..1.5),
                temperature,
                base_size: color::star_size(temperature, radius, max_radius),
                age: 0.0,
            }
        })
        .collect()
}

/// Spawn the mote batch across 1.5x the visible bounds
fn spawn_motes<R: Rng>(rng: &mut R, cfg: &GalaxyConfig) -> Vec<Mote> {
    let extent = cfg.bounds * 1.5;
    (0..cfg.mote_count)
        .map(|_| Mote {
            pos: Vec2::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            ),
            base_size: rng.random_range(0.1..3.0),
            alpha: rng.random_range(0.05..0.3),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = FieldState::new(99999, GalaxyConfig::default());
        let b = FieldState::new(99999, GalaxyConfig::default());

        assert_eq!(a.stars.len(), b.stars.len());
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.motes, b.motes);
    }

    #[test]
    fn test_ages_start_at_zero() {
        let state = FieldState::new(3, GalaxyConfig::default());
        assert!(state.stars.iter().all(|s| s.age == 0.0));
    }

    #[test]
    fn test_regenerate_replaces_batches() {
        let mut state = FieldState::new(11, GalaxyConfig::default());
        let before = state.stars.clone();

        state.regenerate();
        assert_eq!(state.stars.len(), before.len());
        assert_ne!(state.stars, before);
    }

    #[test]
    fn test_bulge_and_arm_counts() {
        let config = GalaxyConfig {
            star_count: 300,
            bulge_count: 100,
            mote_count: 50,
            ..Default::default()
        };
        let state = FieldState::new(1, config);
        // 2 arms divide 300 evenly, so nothing is dropped
        assert_eq!(state.stars.len(), 400);
        assert_eq!(state.motes.len(), 50);
    }
}
