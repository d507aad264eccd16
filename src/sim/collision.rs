//! Collision tests for axis-aligned rectangles
//!
//! Every collision in both demos is a half-open interval overlap:
//! rectangles that only share an edge do not touch.

use glam::Vec2;

use super::rect::Rect;

/// Half-open bounding-rectangle overlap test
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x() < b.x() + b.w() && a.x() + a.w() > b.x() && a.y() < b.y() + b.h() && a.y() + a.h() > b.y()
}

/// Which walls a rectangle has crossed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

/// Check a rectangle against the walls of a `bounds`-sized screen.
///
/// A rectangle is out on an axis when its corner is below zero or past
/// `bounds - size`. Sitting exactly on the limit is still inside.
pub fn outside_bounds(rect: &Rect, bounds: Vec2) -> WallHit {
    let max = bounds - rect.size;
    WallHit {
        x: rect.x() < 0.0 || rect.x() > max.x,
        y: rect.y() < 0.0 || rect.y() > max.y,
    }
}
