//! Surface that records draw calls instead of rasterizing them
//!
//! Used by tests and by the headless binary.

use glam::Vec2;

use super::{Surface, TextAlign};
use crate::sim::{Color, Rect};

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Begin { clear: Color },
    Rect(Rect),
    Text {
        text: String,
        pos: Vec2,
        align: TextAlign,
        color: Color,
    },
    End,
}

/// Keeps the commands of the most recent frame
#[derive(Debug, Clone)]
pub struct Recorder {
    size: Vec2,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Recorder {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Commands of the last frame, begin and end included
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames begun so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rectangles of the last frame, in draw order
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Text strings of the last frame, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn begin_frame(&mut self, clear: Color) {
        self.frames += 1;
        self.commands.clear();
        self.commands.push(DrawCommand::Begin { clear });
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.commands.push(DrawCommand::Rect(*rect));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            align,
            color,
        });
    }

    fn end_frame(&mut self) {
        self.commands.push(DrawCommand::End);
    }
}
