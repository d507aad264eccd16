//! Snake demo: grid snake, food and score
//!
//! The snake lives on a CELL_COUNT x CELL_COUNT grid and moves one cell per
//! step. Steps are gated by a [`StepTimer`], so rendering runs every frame
//! while the snake only moves every `interval` seconds.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Direction, HeldKeys};
use super::step::StepTimer;
use crate::consts::*;

/// Head of the initial snake; the rest trails to the left
pub const START_HEAD: IVec2 = IVec2::new(6, 9);
pub const START_LENGTH: usize = 3;
pub const START_DIRECTION: Direction = Direction::Right;

/// True for cells on the board
pub fn in_bounds(cell: IVec2) -> bool {
    (0..CELL_COUNT).contains(&cell.x) && (0..CELL_COUNT).contains(&cell.y)
}

/// The snake: body cells head first, plus steering state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub body: VecDeque<IVec2>,
    /// Direction used by the next step
    pub direction: Direction,
    /// Direction of the last step taken
    pub last_moved: Direction,
    /// Keep the tail on the next step
    pub should_add_segment: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    pub fn new() -> Self {
        let back = START_DIRECTION.opposite().step();
        let body = (0..START_LENGTH as i32)
            .map(|i| START_HEAD + back * i)
            .collect();
        Self {
            body,
            direction: START_DIRECTION,
            last_moved: START_DIRECTION,
            should_add_segment: false,
        }
    }

    pub fn head(&self) -> IVec2 {
        debug_assert!(!self.body.is_empty(), "snake body is never empty");
        self.body.front().copied().unwrap_or(START_HEAD)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: IVec2) -> bool {
        self.body.contains(&cell)
    }

    /// Head overlaps any later segment
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Advance one cell. Grows by one instead of moving the tail when a
    /// segment is pending.
    fn slither(&mut self) -> IVec2 {
        let new_head = self.head() + self.direction.step();
        self.last_moved = self.direction;
        self.body.push_front(new_head);
        if self.should_add_segment {
            self.should_add_segment = false;
        } else {
            self.body.pop_back();
        }
        new_head
    }
}

/// Complete Snake state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    pub snake: Snake,
    pub food: IVec2,
    pub score: u32,
    /// Best score known to this session (loaded from disk at startup)
    pub high_score: u32,
    /// Discrete steps taken
    pub steps: u64,
}

impl SnakeState {
    /// Fresh state with the food a few cells ahead of the snake
    pub fn new(high_score: u32) -> Self {
        Self {
            snake: Snake::new(),
            food: START_HEAD + START_DIRECTION.step() * 4,
            score: 0,
            high_score,
            steps: 0,
        }
    }

    /// Cells not covered by the snake, in row-major order
    pub fn free_cells(&self) -> Vec<IVec2> {
        (0..CELL_COUNT)
            .flat_map(|y| (0..CELL_COUNT).map(move |x| IVec2::new(x, y)))
            .filter(|&c| !self.snake.occupies(c))
            .collect()
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// No free cell left for food
    BoardFull,
}

/// Events produced by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    Moved,
    Ate { score: u32 },
    Reset {
        cause: ResetCause,
        final_score: u32,
        /// The final score beat the stored high score and must be saved
        new_high_score: bool,
    },
}

/// Snake rules that can be switched back to the permissive baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeRules {
    /// Ignore turns straight back into the neck
    pub prevent_reversal: bool,
    /// Only spawn food on cells the snake doesn't cover
    pub food_avoids_snake: bool,
}

impl Default for SnakeRules {
    fn default() -> Self {
        Self {
            prevent_reversal: true,
            food_avoids_snake: true,
        }
    }
}

/// Owns everything that advances a [`SnakeState`]: step timer, food RNG, rules
#[derive(Debug, Clone)]
pub struct SnakeSim {
    pub timer: StepTimer,
    pub rules: SnakeRules,
    rng: Pcg32,
}

impl SnakeSim {
    pub fn new(tick_interval: f32, seed: u64, rules: SnakeRules) -> Self {
        Self {
            timer: StepTimer::new(tick_interval),
            rules,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Per-frame update: steer from held keys, then step if the timer is due.
    pub fn advance(
        &mut self,
        state: &mut SnakeState,
        held: &HeldKeys,
        dt: f32,
    ) -> Option<SnakeEvent> {
        self.steer(&mut state.snake, held);
        if self.timer.advance(dt) {
            Some(self.step(state))
        } else {
            None
        }
    }

    /// Pick the direction for the next step from the held keys.
    ///
    /// Keys are considered in priority order; with reversal prevention on,
    /// a key pointing back along the last move is skipped.
    pub fn steer(&self, snake: &mut Snake, held: &HeldKeys) {
        let last = snake.last_moved;
        let prevent = self.rules.prevent_reversal;
        if let Some(dir) = held.held().find(|&d| !(prevent && d == last.opposite())) {
            snake.direction = dir;
        }
    }

    /// One discrete step: eat, move, then check walls and body.
    pub fn step(&mut self, state: &mut SnakeState) -> SnakeEvent {
        state.steps += 1;

        let next = state.snake.head() + state.snake.direction.step();
        let ate = next == state.food;
        if ate {
            state.snake.should_add_segment = true;
            state.score += 1;
        }

        let head = state.snake.slither();

        if !in_bounds(head) {
            return self.reset(state, ResetCause::Wall);
        }
        if state.snake.bites_itself() {
            return self.reset(state, ResetCause::SelfCollision);
        }

        if ate {
            log::debug!("Food eaten at {head}, score {}", state.score);
            if !self.respawn_food(state) {
                return self.reset(state, ResetCause::BoardFull);
            }
            return SnakeEvent::Ate { score: state.score };
        }

        SnakeEvent::Moved
    }

    /// End the run: bank the score, then restore the starting snake.
    pub fn reset(&mut self, state: &mut SnakeState, cause: ResetCause) -> SnakeEvent {
        let final_score = state.score;
        let new_high_score = final_score > state.high_score;
        if new_high_score {
            state.high_score = final_score;
        }
        log::debug!(
            "Snake reset ({cause:?}) after {} steps, score {final_score}, high {}",
            state.steps,
            state.high_score
        );

        state.snake = Snake::new();
        state.score = 0;
        // A fresh snake covers only START_LENGTH cells, so a free cell exists
        let placed = self.respawn_food(state);
        debug_assert!(placed, "no free cell after reset");

        SnakeEvent::Reset {
            cause,
            final_score,
            new_high_score,
        }
    }

    /// Move the food to a random cell. Returns false when no cell is free.
    pub fn respawn_food(&mut self, state: &mut SnakeState) -> bool {
        if self.rules.food_avoids_snake {
            let free = state.free_cells();
            match free.choose(&mut self.rng) {
                Some(&cell) => {
                    state.food = cell;
                    true
                }
                None => false,
            }
        } else {
            use rand::Rng;
            state.food = IVec2::new(
                self.rng.random_range(0..CELL_COUNT),
                self.rng.random_range(0..CELL_COUNT),
            );
            true
        }
    }
}
