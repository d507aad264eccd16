//! Rendering module
//!
//! Projects game state onto the two screens through the [`Surface`] trait.
//! Nothing in here mutates game state; the console's 2D library (or a
//! [`Recorder`] in tests and headless runs) sits behind the trait.

pub mod recorder;
pub mod shapes;

pub use recorder::{DrawCommand, Recorder};

use glam::Vec2;

use crate::sim::{Color, PongState, Rect, SnakeState};

/// Horizontal anchoring of a text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `pos` is the left end of the baseline
    Baseline,
    /// `pos` is the top center of the text block
    Center,
}

/// One display target with the primitives the demos need
pub trait Surface {
    /// Size in pixels
    fn size(&self) -> Vec2;
    /// Start a vsync'd frame and clear to `clear`
    fn begin_frame(&mut self, clear: Color);
    fn draw_rect(&mut self, rect: &Rect);
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, color: Color);
    /// Submit the frame
    fn end_frame(&mut self);
}

pub const PAUSED_LABEL: &str = "Game Paused";

/// Where the paused label sits on the Pong top screen
const PONG_PAUSED_POS: Vec2 = Vec2::new(110.0, 60.0);
/// Where the collision counter sits on the Pong bottom screen
const PONG_COUNTER_POS: Vec2 = Vec2::new(150.0, 175.0);

/// Run `draw` between begin and end of a frame on `surface`
fn frame(surface: &mut dyn Surface, draw: impl FnOnce(&mut dyn Surface)) {
    surface.begin_frame(Color::BLACK);
    draw(&mut *surface);
    surface.end_frame();
}

/// Draw both Pong screens
pub fn draw_pong(
    state: &PongState,
    paused: bool,
    top: &mut dyn Surface,
    bottom: &mut dyn Surface,
) {
    frame(top, |s| {
        s.draw_rect(&state.ball.rect);
        s.draw_rect(&state.paddle);
        if paused {
            s.draw_text(PAUSED_LABEL, PONG_PAUSED_POS, TextAlign::Baseline, Color::WHITE);
        }
    });

    frame(bottom, |s| {
        s.draw_rect(&state.marker);
        let counter = format!("Total collisions: {}", state.collisions);
        s.draw_text(&counter, PONG_COUNTER_POS, TextAlign::Center, Color::WHITE);
    });
}

/// Draw both Snake screens: the board on top, scores below
pub fn draw_snake(
    state: &SnakeState,
    paused: bool,
    top: &mut dyn Surface,
    bottom: &mut dyn Surface,
) {
    frame(top, |s| {
        s.draw_rect(&shapes::food_rect(state.food));
        for rect in shapes::snake_rects(&state.snake) {
            s.draw_rect(&rect);
        }
        if paused {
            let center = s.size() / 2.0;
            s.draw_text(PAUSED_LABEL, center, TextAlign::Center, Color::WHITE);
        }
    });

    frame(bottom, |s| {
        let size = s.size();
        let score = format!("Score: {}", state.score);
        let high = format!("High score: {}", state.high_score);
        s.draw_text(
            &score,
            Vec2::new(size.x / 2.0, size.y * 0.4),
            TextAlign::Center,
            Color::WHITE,
        );
        s.draw_text(
            &high,
            Vec2::new(size.x / 2.0, size.y * 0.55),
            TextAlign::Center,
            Color::WHITE,
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn pong_surfaces() -> (Recorder, Recorder) {
        (
            Recorder::new(Vec2::new(TOP_SCREEN_WIDTH, SCREEN_HEIGHT)),
            Recorder::new(Vec2::new(BOTTOM_SCREEN_WIDTH, SCREEN_HEIGHT)),
        )
    }

    #[test]
    fn test_pong_frame_structure() {
        let state = PongState::new();
        let (mut top, mut bottom) = pong_surfaces();
        draw_pong(&state, false, &mut top, &mut bottom);

        assert_eq!(top.commands().first(), Some(&DrawCommand::Begin { clear: Color::BLACK }));
        assert_eq!(top.commands().last(), Some(&DrawCommand::End));
        assert_eq!(top.rects(), vec![state.ball.rect, state.paddle]);
        assert!(top.texts().is_empty());

        assert_eq!(bottom.rects(), vec![state.marker]);
        assert_eq!(bottom.texts(), vec!["Total collisions: 0".to_string()]);
        assert_eq!(top.frames(), 1);
        assert_eq!(bottom.frames(), 1);
    }

    #[test]
    fn test_pong_paused_label() {
        let state = PongState::new();
        let (mut top, mut bottom) = pong_surfaces();
        draw_pong(&state, true, &mut top, &mut bottom);
        assert_eq!(top.texts(), vec![PAUSED_LABEL.to_string()]);
    }

    #[test]
    fn test_snake_frame() {
        let state = SnakeState::new(12);
        let size = Vec2::splat(SNAKE_SCREEN_SIZE);
        let (mut top, mut bottom) = (Recorder::new(size), Recorder::new(size));
        draw_snake(&state, false, &mut top, &mut bottom);

        // Food plus three segments
        assert_eq!(top.rects().len(), 4);
        assert_eq!(
            bottom.texts(),
            vec!["Score: 0".to_string(), "High score: 12".to_string()]
        );
    }

    #[test]
    fn test_snake_paused_label() {
        let state = SnakeState::new(0);
        let size = Vec2::splat(SNAKE_SCREEN_SIZE);
        let (mut top, mut bottom) = (Recorder::new(size), Recorder::new(size));

        draw_snake(&state, true, &mut top, &mut bottom);
        assert_eq!(top.texts(), vec![PAUSED_LABEL.to_string()]);
        assert_eq!(top.rects().len(), 4);

        draw_snake(&state, false, &mut top, &mut bottom);
        assert!(top.texts().is_empty());
    }
}
