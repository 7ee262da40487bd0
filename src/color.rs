//! Scalar-to-color and marker-size mapping
//!
//! Temperature and distance variants plus the narrow-band spectral filters.
//! The affine formulas overshoot [0, 1] at the extremes by construction, so
//! every mapper clamps its channels before returning.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{TEMP_MAX, TEMP_MIN};

/// Map a stellar temperature (Kelvin) to an RGB triple.
///
/// Within the normalized range t: red saturates below t = 0.1, green peaks
/// triangularly at t = 0.5, blue saturates above t = 0.9.
pub fn temperature_to_rgb(kelvin: f32) -> Vec3 {
    let t = (kelvin.clamp(TEMP_MIN, TEMP_MAX) - TEMP_MIN) / (TEMP_MAX - TEMP_MIN);

    let r = if t > 0.1 { 1.0 - 0.8 * (t - 0.1) } else { 1.0 };
    let g = 1.0 - 2.0 * (t - 0.5).abs();
    let b = if t < 0.9 { 1.0 - 0.8 * (0.9 - t) } else { 1.0 };

    Vec3::new(r, g, b).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Map distance from the center to an RGB gradient.
///
/// `balance` blends the warm and cool endpoint palettes; 0.5 is neutral.
pub fn distance_to_rgb(distance: f32, max_distance: f32, balance: f32) -> Vec3 {
    let d = distance / max_distance;

    let r = 0.8 + balance * d;
    let g = 0.5 + (1.0 - balance) * d * 0.5;
    let b = 1.0 - balance * d * 0.7;

    Vec3::new(r, g, b).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Marker size from temperature and disc position: hot inner stars draw large
pub fn star_size(kelvin: f32, radius: f32, max_radius: f32) -> f32 {
    (10.0 + 50.0 * (kelvin / 30000.0) * (1.0 - 0.5 * radius / max_radius)).max(0.0)
}

/// Draw a temperature for a star at disc radius r: hot core, cool rim
pub fn temperature_for_radius<R: Rng>(rng: &mut R, radius: f32, max_radius: f32) -> f32 {
    let frac = radius / max_radius;
    rng.random_range(3000.0..30000.0) * (1.0 - 0.5 * frac) + 3000.0 * frac
}

/// Narrow-band filter over the star field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpectralFilter {
    /// Broadband temperature colors
    #[default]
    Visible,
    /// Cool stars glow red
    Infrared,
    /// Hot stars glow blue
    Ultraviolet,
    /// Hydrogen-emission band
    HAlpha,
}

impl SpectralFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpectralFilter::Visible => "Visible",
            SpectralFilter::Infrared => "Infrared",
            SpectralFilter::Ultraviolet => "Ultraviolet",
            SpectralFilter::HAlpha => "H-Alpha",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visible" => Some(SpectralFilter::Visible),
            "infrared" | "ir" => Some(SpectralFilter::Infrared),
            "ultraviolet" | "uv" => Some(SpectralFilter::Ultraviolet),
            "h-alpha" | "halpha" => Some(SpectralFilter::HAlpha),
            _ => None,
        }
    }

    /// Star color through this filter
    pub fn apply(&self, kelvin: f32) -> Vec3 {
        match self {
            SpectralFilter::Visible => temperature_to_rgb(kelvin),
            SpectralFilter::Infrared => {
                let intensity = ((kelvin - 2000.0) / 2000.0).clamp(0.0, 1.0);
                Vec3::new(intensity, 0.0, 0.0)
            }
            SpectralFilter::Ultraviolet => {
                let intensity = ((40000.0 - kelvin) / 38000.0).clamp(0.0, 1.0);
                Vec3::new(0.0, 0.0, intensity)
            }
            SpectralFilter::HAlpha => {
                let intensity = ((kelvin - 5000.0) / 10000.0).clamp(0.0, 1.0);
                Vec3::new(intensity, 0.0, 0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_unit_channels(c: Vec3) {
        for channel in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&channel), "channel {channel} escaped [0,1]");
        }
    }

    #[test]
    fn test_temperature_boundaries() {
        // Exact bounds, values just beyond them, and extremes
        for kelvin in [
            TEMP_MIN,
            TEMP_MAX,
            TEMP_MIN - 1.0,
            TEMP_MAX + 1.0,
            -5000.0,
            1.0e9,
            20500.0,
        ] {
            assert_unit_channels(temperature_to_rgb(kelvin));
        }
    }

    #[test]
    fn test_temperature_shape() {
        // Cool stars are red-saturated, green peaks at mid-range
        let cool = temperature_to_rgb(2000.0);
        assert_eq!(cool.x, 1.0);

        let mid = temperature_to_rgb(TEMP_MIN + 0.5 * (TEMP_MAX - TEMP_MIN));
        assert!((mid.y - 1.0).abs() < 1e-6);

        let hot = temperature_to_rgb(40000.0);
        assert_eq!(hot.z, 1.0);
        assert!(hot.x < 1.0);
    }

    #[test]
    fn test_distance_boundaries() {
        for distance in [0.0, 7.5, 15.0, 22.5, 100.0] {
            for balance in [0.0, 0.5, 1.0] {
                assert_unit_channels(distance_to_rgb(distance, 15.0, balance));
            }
        }
    }

    #[test]
    fn test_filters_stay_clamped() {
        for filter in [
            SpectralFilter::Visible,
            SpectralFilter::Infrared,
            SpectralFilter::Ultraviolet,
            SpectralFilter::HAlpha,
        ] {
            for kelvin in [0.0, 1999.0, 5000.0, 25000.0, 45000.0] {
                assert_unit_channels(filter.apply(kelvin));
            }
        }
    }

    #[test]
    fn test_filter_round_trips_names() {
        for filter in [
            SpectralFilter::Visible,
            SpectralFilter::Infrared,
            SpectralFilter::Ultraviolet,
            SpectralFilter::HAlpha,
        ] {
            assert_eq!(SpectralFilter::from_str(filter.as_str()), Some(filter));
        }
        assert_eq!(SpectralFilter::from_str("uv"), Some(SpectralFilter::Ultraviolet));
        assert_eq!(SpectralFilter::from_str("x-ray"), None);
    }

    #[test]
    fn test_star_size_nonnegative() {
        assert!(star_size(30000.0, 0.0, 10.0) > 0.0);
        assert!(star_size(0.0, 10.0, 10.0) >= 0.0);
    }

    proptest! {
        #[test]
        fn prop_temperature_channels_clamped(kelvin in -1.0e7f32..1.0e7) {
            assert_unit_channels(temperature_to_rgb(kelvin));
        }

        #[test]
        fn prop_distance_channels_clamped(
            distance in 0.0f32..1.0e4,
            max_distance in 0.1f32..1.0e3,
            balance in 0.0f32..1.0,
        ) {
            assert_unit_channels(distance_to_rgb(distance, max_distance, balance));
        }
    }
}
