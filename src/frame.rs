//! Renderer-facing frame assembly
//!
//! Flattens the field into per-point instance buffers an external scatter
//! renderer can upload directly: repr(C) Pod layout, stars and motes in
//! separate buffers so the renderer can replace either without redrawing
//! the whole figure.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::color::{self, SpectralFilter};
use crate::consts::EROSION_FACTOR;
use crate::field::FieldState;

/// One renderable point: position, straight-alpha color, marker size
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PointInstance {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub size: f32,
}

/// How star colors are derived for a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Color by stellar temperature through a narrow-band filter
    Temperature(SpectralFilter),
    /// Color by distance from the center, blended by the balance slider
    Distance { balance: f32 },
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Temperature(SpectralFilter::Visible)
    }
}

/// A complete frame ready for the external renderer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderFrame {
    pub stars: Vec<PointInstance>,
    pub motes: Vec<PointInstance>,
}

impl RenderFrame {
    /// Assemble instance buffers from the current field state.
    ///
    /// Size decays geometrically with age and opacity fades linearly; motes
    /// always use the distance gradient (neutral balance under temperature
    /// coloring) since they carry no temperature of their own.
    pub fn build(state: &FieldState, mode: ColorMode) -> Self {
        let max_distance = state.config.bounds * 1.5;

        let stars = state
            .stars
            .iter()
            .map(|star| {
                let rgb = match mode {
                    ColorMode::Temperature(filter) => filter.apply(star.temperature),
                    ColorMode::Distance { balance } => {
                        color::distance_to_rgb(star.pos.length(), max_distance, balance)
                    }
                };
                let alpha = (0.3 + 0.7 * (1.0 - star.age)).clamp(0.0, 1.0);
                PointInstance {
                    position: star.pos.to_array(),
                    color: [rgb.x, rgb.y, rgb.z, alpha],
                    size: star.base_size * EROSION_FACTOR.powf(star.age),
                }
            })
            .collect();

        let mote_balance = match mode {
            ColorMode::Distance { balance } => balance,
            ColorMode::Temperature(_) => 0.5,
        };
        let motes = state
            .motes
            .iter()
            .map(|mote| {
                let rgb = color::distance_to_rgb(mote.pos.length(), max_distance, mote_balance);
                PointInstance {
                    position: mote.pos.to_array(),
                    color: [rgb.x, rgb.y, rgb.z, mote.alpha],
                    size: mote.base_size,
                }
            })
            .collect();

        Self { stars, motes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldState, GalaxyConfig, TickInput, tick};

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        // 2 + 4 + 1 floats, no padding: safe to upload as raw bytes
        assert_eq!(std::mem::size_of::<PointInstance>(), 28);
        let instance = PointInstance {
            position: [1.0, 2.0],
            color: [0.1, 0.2, 0.3, 1.0],
            size: 4.0,
        };
        assert_eq!(bytemuck::bytes_of(&instance).len(), 28);
    }

    #[test]
    fn test_frame_matches_state_counts() {
        let state = FieldState::new(2, GalaxyConfig::default());
        let frame = RenderFrame::build(&state, ColorMode::default());
        assert_eq!(frame.stars.len(), state.stars.len());
        assert_eq!(frame.motes.len(), state.motes.len());
    }

    #[test]
    fn test_colors_and_sizes_stay_valid_over_time() {
        let mut state = FieldState::new(13, GalaxyConfig::default());
        let input = TickInput {
            rotation_speed: 5.0,
            boost: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input, crate::consts::TICK_DT);
        }

        let frame = RenderFrame::build(&state, ColorMode::Distance { balance: 0.9 });
        for point in frame.stars.iter().chain(&frame.motes) {
            for channel in point.color {
                assert!((0.0..=1.0).contains(&channel));
            }
            assert!(point.size >= 0.0);
        }
    }

    #[test]
    fn test_erosion_shrinks_aged_stars() {
        let mut state = FieldState::new(77, GalaxyConfig::default());
        let fresh = RenderFrame::build(&state, ColorMode::default());

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), crate::consts::TICK_DT);
        }
        let aged = RenderFrame::build(&state, ColorMode::default());

        for (before, after) in fresh.stars.iter().zip(&aged.stars) {
            assert!(after.size <= before.size);
            assert!(after.color[3] <= before.color[3]);
        }
    }
}
