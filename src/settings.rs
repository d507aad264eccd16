//! Game settings
//!
//! Stored as JSON next to the high score file. A missing or broken file
//! falls back to defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::SnakeRules;

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DemoKind {
    #[default]
    Pong,
    Snake,
}

impl DemoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoKind::Pong => "Pong",
            DemoKind::Snake => "Snake",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub demo: DemoKind,

    /// Seed for food placement
    pub seed: u64,
    /// Frames to run before the headless binary exits
    pub frames: u32,
    /// Seconds per displayed frame
    pub frame_dt: f32,

    // === Snake ===
    /// Seconds between snake steps
    pub snake_tick_secs: f32,
    pub high_score_path: PathBuf,
    /// Ignore turns straight back into the body
    pub prevent_reversal: bool,
    /// Never place food under the snake
    pub food_avoids_snake: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo: DemoKind::Pong,

            seed: 0x5EED,
            frames: 3600,
            frame_dt: FRAME_DT,

            snake_tick_secs: SNAKE_TICK_INTERVAL,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            prevent_reversal: true,
            food_avoids_snake: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "settings.json";

    /// Snake rule switches
    pub fn snake_rules(&self) -> SnakeRules {
        SnakeRules {
            prevent_reversal: self.prevent_reversal,
            food_avoids_snake: self.food_avoids_snake,
        }
    }

    /// Read settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {path:?}");
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            log::warn!("{err}; using default settings");
            Self::default()
        })
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {path:?}");
        Ok(())
    }
}
