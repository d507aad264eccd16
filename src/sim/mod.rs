//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer velocities and grid steps only
//! - Seeded RNG only
//! - No rendering, file or platform dependencies

pub mod collision;
pub mod input;
pub mod pong;
pub mod rect;
pub mod snake;
pub mod step;

pub use collision::{WallHit, outside_bounds, rects_overlap};
pub use input::{Direction, HeldKeys};
pub use pong::{BOUNCE_RULES, Ball, Bounce, PongState};
pub use rect::{Color, Rect};
pub use snake::{ResetCause, Snake, SnakeEvent, SnakeRules, SnakeSim, SnakeState};
pub use step::StepTimer;
