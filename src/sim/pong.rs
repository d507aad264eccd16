//! Pong demo: ball, paddle and the bottom-screen touch marker
//!
//! The ball bounces off the top screen's walls and off the player's paddle.
//! Bounces are resolved by a fixed, ordered rule table (see [`BOUNCE_RULES`]).

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{outside_bounds, rects_overlap};
use super::input::{Direction, HeldKeys};
use super::rect::{Color, Rect};
use crate::consts::*;

/// The bouncing ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Integer velocity in pixels per tick
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        let (vx, vy) = BALL_START_VELOCITY;
        Self {
            // Left of center so it doesn't start on the paddle
            rect: Rect::new(
                TOP_SCREEN_WIDTH / 2.0 - 50.0,
                SCREEN_HEIGHT / 2.0,
                BALL_SIZE,
                BALL_SIZE,
                Color::WHITE,
            ),
            vel: IVec2::new(vx, vy),
        }
    }
}

impl Ball {
    /// Move by one tick of velocity
    pub fn integrate(&mut self) {
        self.rect.pos += self.vel.as_vec2();
    }
}

/// Which bounce fired during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bounce {
    /// Left or right wall
    WallX,
    /// Top or bottom wall
    WallY,
    Paddle,
}

/// Complete Pong state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub ball: Ball,
    /// Player paddle on the top screen
    pub paddle: Rect,
    /// Draggable marker on the bottom screen
    pub marker: Rect,
    /// Paddle hits so far
    pub collisions: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for PongState {
    fn default() -> Self {
        Self::new()
    }
}

impl PongState {
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            paddle: Rect::new(
                TOP_SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0,
                PADDLE_SIZE,
                PADDLE_SIZE,
                Color::WHITE,
            ),
            marker: Rect::new(
                BOTTOM_SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0,
                MARKER_SIZE,
                MARKER_SIZE,
                Color::BLUE,
            ),
            collisions: 0,
            time_ticks: 0,
        }
    }

    pub fn top_bounds() -> Vec2 {
        Vec2::new(TOP_SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn bottom_bounds() -> Vec2 {
        Vec2::new(BOTTOM_SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// One entry of the bounce table
pub struct BounceRule {
    pub kind: Bounce,
    pub applies: fn(&PongState) -> bool,
    pub apply: fn(&mut PongState),
}

/// Bounce rules, checked in order. The first rule that applies wins and the
/// rest are skipped for that tick, so a corner hit reflects only the x axis
/// and the paddle is ignored while the ball is outside a wall. Trajectories
/// depend on this order.
pub const BOUNCE_RULES: [BounceRule; 3] = [
    BounceRule {
        kind: Bounce::WallX,
        applies: |s| outside_bounds(&s.ball.rect, PongState::top_bounds()).x,
        apply: |s| {
            s.ball.vel.x = -s.ball.vel.x;
            s.ball.rect.color = Color::GREEN;
        },
    },
    BounceRule {
        kind: Bounce::WallY,
        applies: |s| outside_bounds(&s.ball.rect, PongState::top_bounds()).y,
        apply: |s| {
            s.ball.vel.y = -s.ball.vel.y;
            s.ball.rect.color = Color::RED;
        },
    },
    BounceRule {
        kind: Bounce::Paddle,
        applies: |s| rects_overlap(&s.paddle, &s.ball.rect),
        apply: |s| {
            s.ball.vel = -s.ball.vel;
            s.ball.rect.color = Color::BLUE;
            s.collisions += 1;
        },
    },
];

/// Advance the Pong simulation by one tick.
///
/// Order: paddle input, bounce table against the ball's current position,
/// then integrate the ball. Returns the bounce that fired, if any.
pub fn advance(state: &mut PongState, held: &HeldKeys) -> Option<Bounce> {
    state.time_ticks += 1;

    move_paddle(&mut state.paddle, held, PongState::top_bounds());

    let bounce = BOUNCE_RULES
        .iter()
        .find(|rule| (rule.applies)(state))
        .map(|rule| {
            (rule.apply)(state);
            rule.kind
        });

    state.ball.integrate();
    bounce
}

/// Move the paddle one step in the first held direction that still has room.
///
/// A held direction whose edge is already reached is skipped, letting the
/// next held direction through. At most one direction moves per tick.
pub fn move_paddle(paddle: &mut Rect, held: &HeldKeys, bounds: Vec2) {
    let max = paddle.max_pos_within(bounds);
    let has_room = |dir: Direction| match dir {
        Direction::Left => paddle.x() > 0.0,
        Direction::Right => paddle.x() < max.x,
        Direction::Up => paddle.y() > 0.0,
        Direction::Down => paddle.y() < max.y,
    };

    let chosen = held.held().find(|d| has_room(*d));
    if let Some(dir) = chosen {
        paddle.pos += dir.step().as_vec2() * PLAYER_SPEED;
        paddle.clamp_within(bounds);
    }
}

/// Follow the stylus with the bottom-screen marker.
///
/// The marker only jumps to touches strictly inside the area where it fits
/// whole; other touches (and no touch) leave it in place. It turns red while
/// the touch point overlaps it. Runs even while the game is paused.
pub fn track_touch(state: &mut PongState, touch: Option<Vec2>) {
    let Some(point) = touch else {
        state.marker.color = Color::BLUE;
        return;
    };

    let max = PongState::bottom_bounds() - state.marker.size;
    if point.x > 0.0 && point.y > 0.0 && point.x < max.x && point.y < max.y {
        state.marker.pos = point;
    }

    let touch_rect = Rect::new(point.x, point.y, TOUCH_SIZE, TOUCH_SIZE, Color::WHITE);
    state.marker.color = if rects_overlap(&touch_rect, &state.marker) {
        Color::RED
    } else {
        Color::BLUE
    };
}
