//! Per-tick input seen by the simulators

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four d-pad directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Priority order used when several keys are held at once
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step in screen space (y grows downward)
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Directional keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Only `dir` held
    pub fn only(dir: Direction) -> Self {
        let mut keys = Self::default();
        keys.set(dir, true);
        keys
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Held directions in priority order (left, right, up, down)
    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .into_iter()
            .filter(move |d| self.is_held(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_priority_order() {
        let keys = HeldKeys {
            left: false,
            right: true,
            up: true,
            down: true,
        };
        let held: Vec<_> = keys.held().collect();
        assert_eq!(held, vec![Direction::Right, Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_opposites_cancel() {
        for dir in Direction::PRIORITY {
            assert_eq!(dir.step() + dir.opposite().step(), IVec2::ZERO);
        }
    }
}
