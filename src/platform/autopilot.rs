//! Idle/demo mode: pick keys from the current state so a demo can play
//! itself in headless runs

use glam::IVec2;

use crate::consts::PLAYER_SPEED;
use crate::sim::snake::in_bounds;
use crate::sim::{Direction, HeldKeys, PongState, SnakeState};

/// Chase the ball's center with the paddle's center, one axis at a time
pub fn pong_keys(state: &PongState) -> HeldKeys {
    let ball = state.ball.rect.pos + state.ball.rect.size / 2.0;
    let paddle = state.paddle.pos + state.paddle.size / 2.0;
    let delta = ball - paddle;

    // Within half a step counts as lined up
    let dead_zone = PLAYER_SPEED / 2.0;
    if delta.x.abs() <= dead_zone && delta.y.abs() <= dead_zone {
        return HeldKeys::none();
    }

    let dir = if delta.x.abs() >= delta.y.abs() {
        if delta.x < 0.0 { Direction::Left } else { Direction::Right }
    } else if delta.y < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    HeldKeys::only(dir)
}

/// Greedy snake: step toward the food along a safe cell.
///
/// A cell is safe when it is on the board and not covered by the body (the
/// tail cell counts as free unless the snake is about to grow). Falls back
/// to holding nothing, which keeps the current heading.
pub fn snake_keys(state: &SnakeState) -> HeldKeys {
    let snake = &state.snake;
    let head = snake.head();
    let tail_moves = !snake.should_add_segment;
    let body_len = snake.len();

    let safe = |cell: IVec2| {
        in_bounds(cell)
            && !snake
                .body
                .iter()
                .take(if tail_moves { body_len - 1 } else { body_len })
                .any(|&c| c == cell)
    };

    Direction::PRIORITY
        .into_iter()
        .filter(|&d| d != snake.last_moved.opposite())
        .map(|d| (d, head + d.step()))
        .filter(|&(_, cell)| safe(cell))
        .min_by_key(|&(_, cell)| (cell - state.food).abs().element_sum())
        .map(|(d, _)| HeldKeys::only(d))
        .unwrap_or_default()
}
