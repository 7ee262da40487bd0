//! Raster density field (nucleus plus arm interference)
//!
//! Image-style variant of the galaxy: a scalar intensity sampled on a square
//! grid, combining a Gaussian nucleus with spiral arms produced by a
//! radial/angular interference term. Pure math, no randomness.

use serde::{Deserialize, Serialize};

/// Shape of the raster intensity field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Width of the Gaussian nucleus falloff
    pub core_width: f32,
    /// Radial frequency of the arm interference term
    pub radial_freq: f32,
    /// Angular frequency (arm windings around the core)
    pub angular_freq: f32,
    /// Exponential falloff length of the arms
    pub arm_falloff: f32,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            core_width: 0.5,
            radial_freq: 2.0,
            angular_freq: 5.0,
            arm_falloff: 3.0,
        }
    }
}

impl DensityConfig {
    /// Intensity at a point: nucleus plus arm term
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let r2 = x * x + y * y;
        let nucleus = (-r2 / self.core_width).exp();

        let radius = r2.sqrt();
        let angle = y.atan2(x);
        let arms = (self.radial_freq * radius + self.angular_freq * angle).sin()
            * (-radius / self.arm_falloff).exp();

        nucleus + arms
    }
}

/// Square intensity raster over [-extent, extent] in both axes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityMap {
    pub resolution: usize,
    pub extent: f32,
    /// Row-major samples, resolution * resolution values
    pub values: Vec<f32>,
}

impl DensityMap {
    /// Sample the config on a resolution x resolution grid
    pub fn generate(config: &DensityConfig, resolution: usize, extent: f32) -> Self {
        let step = resolution.saturating_sub(1).max(1) as f32;
        let mut values = Vec::with_capacity(resolution * resolution);

        for row in 0..resolution {
            let y = -extent + 2.0 * extent * row as f32 / step;
            for col in 0..resolution {
                let x = -extent + 2.0 * extent * col as f32 / step;
                values.push(config.sample(x, y));
            }
        }

        Self {
            resolution,
            extent,
            values,
        }
    }

    /// Value at grid cell (col, row)
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.values[row * self.resolution + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleus_peaks_at_center() {
        let config = DensityConfig::default();
        // At the origin the arm term vanishes and the nucleus is exactly 1
        assert_eq!(config.sample(0.0, 0.0), 1.0);
        assert!(config.sample(3.0, 3.0) < 1.0);
    }

    #[test]
    fn test_map_dimensions_and_bounds() {
        let map = DensityMap::generate(&DensityConfig::default(), 64, 5.0);
        assert_eq!(map.values.len(), 64 * 64);

        // Nucleus and arm terms are each bounded by 1
        for &v in &map.values {
            assert!((-2.0..=2.0).contains(&v));
        }

        // Center cell of an odd-resolution map is the origin
        let map = DensityMap::generate(&DensityConfig::default(), 65, 5.0);
        assert_eq!(map.get(32, 32), 1.0);
    }

    #[test]
    fn test_arms_fade_with_radius() {
        let config = DensityConfig::default();
        // Far from the core both terms are tiny
        assert!(config.sample(40.0, 0.0).abs() < 1e-4);
    }
}
