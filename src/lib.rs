//! Handheld Arcade - Pong and Snake for a dual-screen handheld
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rectangles, collisions, game state)
//! - `renderer`: Projection of game state onto two draw surfaces
//! - `platform`: Input sampling (held keys, pause, touch)
//! - `game`: Per-frame loop tying input, simulation and rendering together
//! - `highscores`: Single-integer high score file
//! - `settings`: JSON configuration

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{HighScoreError, SettingsError};
pub use game::{Demo, PongDemo, SnakeDemo};
pub use highscores::HighScoreFile;
pub use settings::{DemoKind, Settings};

/// Game configuration constants
pub mod consts {
    /// Top screen dimensions (Pong)
    pub const TOP_SCREEN_WIDTH: f32 = 400.0;
    /// Bottom screen is narrower but the same height
    pub const BOTTOM_SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    /// Paddle step per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const PADDLE_SIZE: f32 = 32.0;

    pub const BALL_SIZE: f32 = 20.0;
    /// Initial ball velocity, pixels per tick
    pub const BALL_START_VELOCITY: (i32, i32) = (5, 5);

    /// Bottom screen touch marker
    pub const MARKER_SIZE: f32 = 32.0;
    /// Rectangle placed under the stylus for hit testing
    pub const TOUCH_SIZE: f32 = 8.0;

    /// Snake grid
    pub const CELL_SIZE: i32 = 10;
    pub const CELL_COUNT: i32 = 27;
    /// Snake screens are square: CELL_SIZE * CELL_COUNT
    pub const SNAKE_SCREEN_SIZE: f32 = (CELL_SIZE * CELL_COUNT) as f32;
    /// Seconds between snake steps
    pub const SNAKE_TICK_INTERVAL: f32 = 0.2;

    /// Display refresh (frames are vsync-bound)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default high score location
    pub const HIGH_SCORE_FILE: &str = "high-score.txt";
}
