//! Simulation settings and presets
//!
//! Persisted as a JSON file next to the binary; missing or corrupt files
//! fall back to defaults with a log line rather than an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::SpectralFilter;
use crate::field::GalaxyConfig;

/// Point-count preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DetailPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl DetailPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailPreset::Low => "Low",
            DetailPreset::Medium => "Medium",
            DetailPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(DetailPreset::Low),
            "medium" | "med" => Some(DetailPreset::Medium),
            "high" => Some(DetailPreset::High),
            _ => None,
        }
    }

    /// Arm-star population for this preset
    pub fn star_count(&self) -> usize {
        match self {
            DetailPreset::Low => 500,
            DetailPreset::Medium => 2000,
            DetailPreset::High => 5000,
        }
    }

    /// Bulge population
    pub fn bulge_count(&self) -> usize {
        match self {
            DetailPreset::Low => 150,
            DetailPreset::Medium => 500,
            DetailPreset::High => 1200,
        }
    }

    /// Nebula motes
    pub fn mote_count(&self) -> usize {
        match self {
            DetailPreset::Low => 400,
            DetailPreset::Medium => 2000,
            DetailPreset::High => 4000,
        }
    }
}

/// Simulation settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Point-count preset
    pub detail: DetailPreset,
    /// Galaxy shape (arm layout, radial profile, rotation curve, bounds)
    pub galaxy: GalaxyConfig,

    // === Control defaults (the external UI seeds its widgets from these) ===
    /// Rotation-speed slider start value, radians per second
    pub rotation_speed: f32,
    /// Color-balance slider start value
    pub color_balance: f32,
    /// Initially selected spectral filter
    pub filter: SpectralFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            detail: DetailPreset::Medium,
            galaxy: GalaxyConfig::default(),
            rotation_speed: 0.4,
            color_balance: 0.5,
            filter: SpectralFilter::Visible,
        }
    }
}

impl Settings {
    /// Galaxy config with the preset's population counts applied
    pub fn effective_galaxy(&self) -> GalaxyConfig {
        let mut galaxy = self.galaxy.clone();
        galaxy.star_count = self.detail.star_count();
        galaxy.bulge_count = self.detail.bulge_count();
        galaxy.mote_count = self.detail.mote_count();
        galaxy
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {err}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {err}"),
        }
    }
}
