//! Handheld Arcade entry point
//!
//! Headless runner: loads `settings.json`, lets the selected demo play itself
//! for the configured number of frames, drawing into recorders instead of
//! the console's screens.

use std::path::Path;

use handheld_arcade::game;
use handheld_arcade::platform::Autopilot;
use handheld_arcade::renderer::Recorder;
use handheld_arcade::settings::Settings;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    log::info!(
        "Handheld Arcade starting {} for {} frames (seed {})",
        settings.demo.as_str(),
        settings.frames,
        settings.seed
    );

    let mut demo = game::from_settings(&settings);
    let (top_size, bottom_size) = demo.screen_sizes();
    let mut top = Recorder::new(top_size);
    let mut bottom = Recorder::new(bottom_size);

    game::run(
        &mut *demo,
        &mut Autopilot,
        settings.frames,
        settings.frame_dt,
        &mut top,
        &mut bottom,
    );

    log::info!("{} finished: {}", settings.demo.as_str(), demo.summary());
    for text in bottom.texts() {
        println!("{text}");
    }
}
