//! Fixed-step gate
//!
//! Frames arrive at display rate, but the snake only moves every
//! `interval` seconds. The timer accumulates frame time and fires once the
//! interval is reached, then starts again from zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTimer {
    /// Seconds between steps
    pub interval: f32,
    /// Seconds accumulated since the last step
    pub elapsed: f32,
}

impl StepTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Add a frame's worth of time. Returns true when a step is due.
    ///
    /// Leftover time past the threshold is dropped, so a long frame still
    /// produces at most one step.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
