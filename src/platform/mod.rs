//! Platform abstraction layer
//!
//! The console's button and touch polling live behind [`InputSource`].
//! Each frame yields one [`FrameInput`]: held d-pad keys, whether pause was
//! pressed this frame, and the stylus position if the bottom screen is
//! touched.

pub mod autopilot;

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::HeldKeys;

/// Everything sampled from the hardware for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub held: HeldKeys,
    /// Start pressed this frame (edge, not level)
    pub pause_pressed: bool,
    /// Bottom screen touch, in bottom screen pixels
    pub touch: Option<Vec2>,
}

/// Source of per-frame input
pub trait InputSource {
    /// Sample the next frame. `idle` is what the running demo would press on
    /// its own; sources without a player may use it.
    fn poll(&mut self, idle: HeldKeys) -> FrameInput;
}

/// Replays a fixed list of frames, then nothing
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    frames: VecDeque<FrameInput>,
}

impl Scripted {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _idle: HeldKeys) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Lets the demo play itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self, idle: HeldKeys) -> FrameInput {
        FrameInput {
            held: idle,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[test]
    fn test_scripted_runs_out() {
        let pause = FrameInput {
            pause_pressed: true,
            ..Default::default()
        };
        let mut src = Scripted::new([pause]);
        assert_eq!(src.poll(HeldKeys::none()), pause);
        assert_eq!(src.remaining(), 0);
        assert_eq!(src.poll(HeldKeys::none()), FrameInput::default());
    }

    #[test]
    fn test_autopilot_passes_idle_keys() {
        let idle = HeldKeys::only(Direction::Down);
        let input = Autopilot.poll(idle);
        assert_eq!(input.held, idle);
        assert!(!input.pause_pressed);
        assert_eq!(input.touch, None);
    }
}
