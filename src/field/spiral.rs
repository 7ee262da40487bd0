//! Spiral-arm star placement
//!
//! Arm stars follow the logarithmic spiral theta = k * ln(r + eps) plus the
//! arm's base offset and Gaussian angular jitter. Tightness k controls how
//! many turns an arm makes before reaching the outer radius.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::consts::{GALAXY_RADIUS, LOG_EPSILON};

/// How radii are drawn across the arm's radial band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum RadialProfile {
    /// Uniform draw across the band
    #[default]
    Uniform,
    /// Inverse-CDF power draw u^(1/shape); shape < 1 piles stars near the center
    PowerBiased { shape: f32 },
    /// Evenly spaced radii, no randomness
    Even,
}

impl RadialProfile {
    /// Unit-interval sample for the i-th of n points
    fn sample<R: Rng>(self, rng: &mut R, index: usize, count: usize) -> f32 {
        match self {
            RadialProfile::Uniform => rng.random_range(0.0..1.0),
            RadialProfile::PowerBiased { shape } => {
                let u: f32 = rng.random_range(0.0..1.0);
                u.powf(1.0 / shape)
            }
            RadialProfile::Even => {
                if count <= 1 {
                    0.0
                } else {
                    index as f32 / (count - 1) as f32
                }
            }
        }
    }
}

/// Shape of the spiral-arm structure
///
/// Invariants: radii are non-negative with `inner_radius < outer_radius`,
/// `jitter >= 0`. Angles are never normalized anywhere in the field; only
/// their cosine/sine are consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiralArmConfig {
    /// Number of arms
    pub arm_count: u32,
    /// Spiral tightness k
    pub tightness: f32,
    /// Angular jitter standard deviation around the arm centerline
    pub jitter: f32,
    /// Inner edge of the arm band (also the bulge scale)
    pub inner_radius: f32,
    /// Outer edge of the disc
    pub outer_radius: f32,
}

impl Default for SpiralArmConfig {
    fn default() -> Self {
        Self {
            arm_count: 2,
            tightness: 1.5,
            jitter: 0.1,
            inner_radius: 0.2 * GALAXY_RADIUS,
            outer_radius: GALAXY_RADIUS,
        }
    }
}

impl SpiralArmConfig {
    /// Base angular offset of an arm
    #[inline]
    pub fn base_offset(&self, arm: u32) -> f32 {
        arm as f32 * TAU / self.arm_count.max(1) as f32
    }

    /// Centerline angle of an arm at radius r
    #[inline]
    pub fn arm_theta(&self, r: f32, arm: u32) -> f32 {
        self.tightness * (r + LOG_EPSILON).ln() + self.base_offset(arm)
    }
}

/// Batch-generate arm stars as (radius, theta) pairs.
///
/// `n` is split evenly across arms; the remainder is dropped.
pub fn spawn_arm_points<R: Rng>(
    rng: &mut R,
    cfg: &SpiralArmConfig,
    n: usize,
    profile: RadialProfile,
) -> Vec<(f32, f32)> {
    let arms = cfg.arm_count.max(1);
    let per_arm = n / arms as usize;
    let mut points = Vec::with_capacity(per_arm * arms as usize);

    for arm in 0..arms {
        for i in 0..per_arm {
            let t = profile.sample(rng, i, per_arm);
            let r = cfg.inner_radius + t * (cfg.outer_radius - cfg.inner_radius);
            let wobble: f32 = rng.sample(StandardNormal);
            let theta = cfg.arm_theta(r, arm) + wobble * cfg.jitter;
            points.push((r, theta));
        }
    }

    points
}

/// 3-D variant: same disc placement, elevation drawn at a tenth of the jitter
pub fn spawn_arm_points_3d<R: Rng>(
    rng: &mut R,
    cfg: &SpiralArmConfig,
    n: usize,
    profile: RadialProfile,
) -> Vec<Vec3> {
    spawn_arm_points(rng, cfg, n, profile)
        .into_iter()
        .map(|(r, theta)| {
            let z: f32 = rng.sample::<f32, _>(StandardNormal) * cfg.jitter * 0.1;
            Vec3::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect()
}

/// Isotropic Gaussian bulge projected onto the disc plane
pub fn spawn_bulge<R: Rng>(rng: &mut R, n: usize, radius: f32) -> Vec<Vec2> {
    (0..n)
        .map(|_| {
            let x: f32 = rng.sample::<f32, _>(StandardNormal) * radius;
            let y: f32 = rng.sample::<f32, _>(StandardNormal) * radius;
            Vec2::new(x, y)
        })
        .collect()
}

/// 3-D bulge, flattened to a tenth of its scale along z
pub fn spawn_bulge_3d<R: Rng>(rng: &mut R, n: usize, radius: f32) -> Vec<Vec3> {
    (0..n)
        .map(|_| {
            let x: f32 = rng.sample::<f32, _>(StandardNormal) * radius;
            let y: f32 = rng.sample::<f32, _>(StandardNormal) * radius;
            let z: f32 = rng.sample::<f32, _>(StandardNormal) * radius * 0.1;
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Pull uniform-disc stars onto their nearest arm.
///
/// A point outside the bulge whose angle lies within `arm_width` of the
/// nearest arm direction is re-angled onto that arm with probability 0.7.
pub fn snap_to_arms<R: Rng>(
    rng: &mut R,
    cfg: &SpiralArmConfig,
    arm_width: f32,
    bulge_radius: f32,
    points: &mut [(f32, f32)],
) {
    let sector = TAU / cfg.arm_count.max(1) as f32;

    for point in points.iter_mut() {
        let (r, theta) = *point;
        if r <= bulge_radius {
            continue;
        }

        let nearest = (theta / sector).round() * sector;
        if (theta - nearest).abs() < arm_width && rng.random_bool(0.7) {
            point.1 = nearest + rng.random_range(-arm_width..arm_width);
        }
    }
}
