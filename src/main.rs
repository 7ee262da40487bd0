//! Galaxia entry point
//!
//! Headless demo driver: owns the refresh loop, advances the field once per
//! fixed interval, and logs frame statistics. A real deployment swaps the
//! logging for a scatter renderer fed with each [`RenderFrame`].

use std::path::Path;
use std::time::{Duration, Instant};

use galaxia::consts::TICK_DT;
use galaxia::field::{FieldState, TickInput, tick};
use galaxia::frame::{ColorMode, RenderFrame};
use galaxia::settings::Settings;

const SETTINGS_PATH: &str = "galaxia.json";

fn main() {
    env_logger::init();

    // Usage: galaxia [seed] [ticks]
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let total_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);

    let settings = Settings::load(Path::new(SETTINGS_PATH));
    let mut state = FieldState::new(seed, settings.effective_galaxy());

    let input = TickInput {
        rotation_speed: settings.rotation_speed,
        color_balance: settings.color_balance,
        ..TickInput::default()
    };
    let mode = ColorMode::Temperature(settings.filter);

    log::info!(
        "Running {total_ticks} ticks at {:.0} Hz (seed {seed}, {} filter)",
        1.0 / TICK_DT,
        settings.filter.as_str()
    );

    let interval = Duration::from_secs_f32(TICK_DT);
    let started = Instant::now();

    for i in 0..total_ticks {
        let frame_start = Instant::now();

        tick(&mut state, &input, TICK_DT);
        let frame = RenderFrame::build(&state, mode);

        // An attached renderer would consume `frame` here
        if i % 20 == 0 {
            let mean_radius: f32 = frame
                .stars
                .iter()
                .map(|p| (p.position[0].powi(2) + p.position[1].powi(2)).sqrt())
                .sum::<f32>()
                / frame.stars.len().max(1) as f32;
            log::info!(
                "tick {i}: {} stars, {} motes, mean radius {mean_radius:.2}",
                frame.stars.len(),
                frame.motes.len()
            );
        }

        if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Done: {total_ticks} ticks in {:.2?}", started.elapsed());
}
