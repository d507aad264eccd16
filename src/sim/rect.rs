//! Axis-aligned rectangles and display colors
//!
//! A rectangle is defined by:
//! - pos: top-left corner in screen pixels
//! - depth: z value handed to the draw call (0 for everything in these demos)
//! - size: width and height, never negative

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(0xFF, 0xFF, 0xFF, 0xFF);
    /// Fully transparent black, used to clear the screens
    pub const BLACK: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);
    pub const GREEN: Color = Color::rgba(0x00, 0xFF, 0x00, 0xFF);
    pub const RED: Color = Color::rgba(0xFF, 0x00, 0x00, 0xFF);
    pub const BLUE: Color = Color::rgba(0x00, 0x00, 0xFF, 0xFF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0xAABBGGRR, the layout the console's 2D library expects
    pub fn to_abgr32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
}

/// A filled rectangle on one of the screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Draw depth
    pub depth: f32,
    /// Width and height
    pub size: Vec2,
    pub color: Color,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            depth: 0.0,
            size: Vec2::new(w.max(0.0), h.max(0.0)),
            color,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.size.y
    }

    /// Largest top-left corner that keeps the rectangle inside `bounds`
    pub fn max_pos_within(&self, bounds: Vec2) -> Vec2 {
        (bounds - self.size).max(Vec2::ZERO)
    }

    /// Pull the rectangle back inside a `bounds`-sized screen
    pub fn clamp_within(&mut self, bounds: Vec2) {
        self.pos = self.pos.clamp(Vec2::ZERO, self.max_pos_within(bounds));
    }
}
