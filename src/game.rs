//! Per-frame loop
//!
//! Every frame: sample input, toggle pause, advance the simulation unless
//! paused, then draw the top and bottom screens. Everything runs in that
//! order on one thread.

use glam::Vec2;

use crate::consts::*;
use crate::highscores::HighScoreFile;
use crate::platform::{FrameInput, InputSource, autopilot};
use crate::renderer::{self, Surface};
use crate::settings::{DemoKind, Settings};
use crate::sim::{HeldKeys, PongState, SnakeEvent, SnakeSim, SnakeState, pong};

/// A runnable demo
pub trait Demo {
    fn kind(&self) -> DemoKind;
    /// Top and bottom screen sizes
    fn screen_sizes(&self) -> (Vec2, Vec2);
    fn is_paused(&self) -> bool;
    /// Keys the demo would press to play itself
    fn idle_input(&self) -> HeldKeys;
    /// Apply one frame of input and `dt` seconds of time
    fn frame(&mut self, input: &FrameInput, dt: f32);
    fn render(&self, top: &mut dyn Surface, bottom: &mut dyn Surface);
    /// One-line score summary
    fn summary(&self) -> String;
}

/// Build the demo selected in `settings`
pub fn from_settings(settings: &Settings) -> Box<dyn Demo> {
    match settings.demo {
        DemoKind::Pong => Box::new(PongDemo::new()),
        DemoKind::Snake => Box::new(SnakeDemo::new(settings)),
    }
}

/// Input, simulate, render
pub fn run_frame(
    demo: &mut dyn Demo,
    input: &mut dyn InputSource,
    dt: f32,
    top: &mut dyn Surface,
    bottom: &mut dyn Surface,
) {
    let frame_input = input.poll(demo.idle_input());
    demo.frame(&frame_input, dt);
    demo.render(top, bottom);
}

/// Run `frames` frames back to back
pub fn run(
    demo: &mut dyn Demo,
    input: &mut dyn InputSource,
    frames: u32,
    dt: f32,
    top: &mut dyn Surface,
    bottom: &mut dyn Surface,
) {
    for _ in 0..frames {
        run_frame(demo, input, dt, top, bottom);
    }
}

/// Bouncing ball on top, touch marker below
#[derive(Debug, Clone, Default)]
pub struct PongDemo {
    pub state: PongState,
    pub paused: bool,
}

impl PongDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for PongDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Pong
    }

    fn screen_sizes(&self) -> (Vec2, Vec2) {
        (PongState::top_bounds(), PongState::bottom_bounds())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn idle_input(&self) -> HeldKeys {
        autopilot::pong_keys(&self.state)
    }

    fn frame(&mut self, input: &FrameInput, _dt: f32) {
        // The marker follows the stylus even while paused
        pong::track_touch(&mut self.state, input.touch);

        if input.pause_pressed {
            self.paused = !self.paused;
            log::debug!("Pong {}", if self.paused { "paused" } else { "resumed" });
        }
        if self.paused {
            return;
        }

        if let Some(bounce) = pong::advance(&mut self.state, &input.held) {
            log::trace!("Bounce {bounce:?} at tick {}", self.state.time_ticks);
        }
    }

    fn render(&self, top: &mut dyn Surface, bottom: &mut dyn Surface) {
        renderer::draw_pong(&self.state, self.paused, top, bottom);
    }

    fn summary(&self) -> String {
        format!(
            "{} ticks, {} paddle collisions",
            self.state.time_ticks, self.state.collisions
        )
    }
}

/// Snake board on top, scores below
#[derive(Debug, Clone)]
pub struct SnakeDemo {
    pub state: SnakeState,
    pub sim: SnakeSim,
    pub paused: bool,
    scores: HighScoreFile,
    /// Runs ended so far
    pub resets: u32,
}

impl SnakeDemo {
    /// New game; the high score is read from (or created at) the configured path
    pub fn new(settings: &Settings) -> Self {
        let scores = HighScoreFile::new(&settings.high_score_path);
        let high_score = scores.load_or_zero(0);
        Self {
            state: SnakeState::new(high_score),
            sim: SnakeSim::new(settings.snake_tick_secs, settings.seed, settings.snake_rules()),
            paused: false,
            scores,
            resets: 0,
        }
    }

    fn on_event(&mut self, event: SnakeEvent) {
        if let SnakeEvent::Reset {
            cause,
            final_score,
            new_high_score,
        } = event
        {
            self.resets += 1;
            log::debug!("Run over ({cause:?}) with score {final_score}");
            if new_high_score {
                if let Err(err) = self.scores.save(final_score) {
                    log::warn!("Could not save high score: {err}");
                }
            }
        }
    }
}

impl Demo for SnakeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Snake
    }

    fn screen_sizes(&self) -> (Vec2, Vec2) {
        let side = Vec2::splat(SNAKE_SCREEN_SIZE);
        (side, side)
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn idle_input(&self) -> HeldKeys {
        autopilot::snake_keys(&self.state)
    }

    fn frame(&mut self, input: &FrameInput, dt: f32) {
        if input.pause_pressed {
            self.paused = !self.paused;
            log::debug!("Snake {}", if self.paused { "paused" } else { "resumed" });
        }
        if self.paused {
            return;
        }

        if let Some(event) = self.sim.advance(&mut self.state, &input.held, dt) {
            self.on_event(event);
        }
    }

    fn render(&self, top: &mut dyn Surface, bottom: &mut dyn Surface) {
        renderer::draw_snake(&self.state, self.paused, top, bottom);
    }

    fn summary(&self) -> String {
        format!(
            "{} steps, {} runs ended, score {}, high score {}",
            self.state.steps, self.resets, self.state.score, self.state.high_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Autopilot, Scripted};
    use crate::renderer::Recorder;
    use crate::sim::{Direction, snake::START_HEAD};
    use glam::IVec2;
    use std::fs;

    fn recorders(demo: &dyn Demo) -> (Recorder, Recorder) {
        let (top, bottom) = demo.screen_sizes();
        (Recorder::new(top), Recorder::new(bottom))
    }

    fn pause() -> FrameInput {
        FrameInput {
            pause_pressed: true,
            ..Default::default()
        }
    }

    fn snake_settings(dir: &tempfile::TempDir) -> Settings {
        Settings {
            demo: DemoKind::Snake,
            high_score_path: dir.path().join(HIGH_SCORE_FILE),
            ..Default::default()
        }
    }

    #[test]
    fn test_pong_pause_freezes_ball() {
        let mut demo = PongDemo::new();
        let (mut top, mut bottom) = recorders(&demo);
        let mut input = Scripted::new([FrameInput::default(), pause(), FrameInput::default()]);

        run_frame(&mut demo, &mut input, FRAME_DT, &mut top, &mut bottom);
        let moved = demo.state.ball.rect.pos;
        assert_ne!(moved, PongState::new().ball.rect.pos);

        run_frame(&mut demo, &mut input, FRAME_DT, &mut top, &mut bottom);
        run_frame(&mut demo, &mut input, FRAME_DT, &mut top, &mut bottom);
        assert!(demo.is_paused());
        assert_eq!(demo.state.ball.rect.pos, moved);
        assert_eq!(top.texts(), vec![renderer::PAUSED_LABEL.to_string()]);
        assert_eq!(top.frames(), 3);
    }

    #[test]
    fn test_pong_touch_while_paused() {
        let mut demo = PongDemo::new();
        demo.paused = true;
        let touch = FrameInput {
            touch: Some(Vec2::new(50.0, 60.0)),
            ..Default::default()
        };
        demo.frame(&touch, FRAME_DT);
        assert_eq!(demo.state.marker.pos, Vec2::new(50.0, 60.0));
        assert_eq!(demo.state.time_ticks, 0);
    }

    #[test]
    fn test_pong_autopilot_counts_collisions() {
        let mut demo = PongDemo::new();
        let (mut top, mut bottom) = recorders(&demo);
        run(&mut demo, &mut Autopilot, 2000, FRAME_DT, &mut top, &mut bottom);
        assert!(demo.state.collisions > 0);
        assert_eq!(
            bottom.texts(),
            vec![format!("Total collisions: {}", demo.state.collisions)]
        );
    }

    #[test]
    fn test_snake_cold_start_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = snake_settings(&dir);
        let demo = SnakeDemo::new(&settings);
        assert_eq!(demo.state.high_score, 0);
        assert_eq!(fs::read_to_string(&settings.high_score_path).unwrap(), "0");
    }

    #[test]
    fn test_snake_wall_saves_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let settings = snake_settings(&dir);
        let mut demo = SnakeDemo::new(&settings);
        demo.state.score = 3;
        demo.state.food = IVec2::new(0, 0);
        demo.state.snake.body = [IVec2::new(26, 9), IVec2::new(25, 9), IVec2::new(24, 9)].into();

        demo.frame(&FrameInput::default(), settings.snake_tick_secs);

        assert_eq!(demo.resets, 1);
        assert_eq!(demo.state.score, 0);
        assert_eq!(demo.state.snake.head(), START_HEAD);
        assert_eq!(demo.state.high_score, 3);
        assert_eq!(fs::read_to_string(&settings.high_score_path).unwrap(), "3");

        // A lower score leaves the file alone
        let mut demo = SnakeDemo::new(&settings);
        assert_eq!(demo.state.high_score, 3);
        demo.state.score = 1;
        demo.state.snake.direction = Direction::Up;
        demo.state.snake.last_moved = Direction::Up;
        demo.state.snake.body = [IVec2::new(5, 0), IVec2::new(5, 1), IVec2::new(5, 2)].into();
        demo.frame(&FrameInput::default(), settings.snake_tick_secs);
        assert_eq!(demo.resets, 1);
        assert_eq!(fs::read_to_string(&settings.high_score_path).unwrap(), "3");
    }

    #[test]
    fn test_snake_pause_freezes_timer() {
        let dir = tempfile::tempdir().unwrap();
        let settings = snake_settings(&dir);
        let mut demo = SnakeDemo::new(&settings);
        demo.state.food = IVec2::new(0, 0);

        demo.frame(&pause(), 1.0);
        assert!(demo.is_paused());
        assert_eq!(demo.state.steps, 0);
        assert_eq!(demo.sim.timer.elapsed, 0.0);
        assert_eq!(demo.state.snake.head(), START_HEAD);

        demo.frame(&FrameInput::default(), 1.0);
        assert_eq!(demo.state.steps, 0);

        // Unpausing resumes stepping on the same frame
        demo.frame(&pause(), 1.0);
        assert!(!demo.is_paused());
        assert_eq!(demo.state.steps, 1);
        assert_eq!(demo.state.snake.head(), IVec2::new(7, 9));
    }

    #[test]
    fn test_snake_corrupt_high_score_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let settings = snake_settings(&dir);
        fs::write(&settings.high_score_path, "not a number").unwrap();
        let demo = SnakeDemo::new(&settings);
        assert_eq!(demo.state.high_score, 0);
    }

    #[test]
    fn test_snake_renders_every_frame_moves_on_interval() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            snake_tick_secs: 0.25,
            ..snake_settings(&dir)
        };
        let mut demo = SnakeDemo::new(&settings);
        demo.state.food = IVec2::new(0, 0);
        let (mut top, mut bottom) = recorders(&demo);

        // 4 frames per step
        run(&mut demo, &mut Scripted::default(), 8, 0.0625, &mut top, &mut bottom);
        assert_eq!(top.frames(), 8);
        assert_eq!(demo.state.steps, 2);
        assert_eq!(demo.state.snake.head(), IVec2::new(8, 9));
    }

    #[test]
    fn test_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = snake_settings(&dir);
        assert_eq!(from_settings(&settings).kind(), DemoKind::Snake);
        assert_eq!(from_settings(&Settings::default()).kind(), DemoKind::Pong);
    }
}
