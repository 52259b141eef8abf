//! Frame scheduler
//!
//! Owns the game and input state and runs one update + render per display
//! frame. The host drives it: request another frame on `Continue`, schedule
//! `final_render` after the returned delay on `GameOver`, and stop on
//! `Stopped`.

use std::time::Duration;

use crate::consts::GAME_OVER_DELAY;
use crate::renderer::{DrawSurface, draw_game_over, draw_scene};
use crate::sim::{GameState, InputState, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request the next frame
    Continue,
    /// The game just ended: call `final_render` once after `delay`
    GameOver { delay: Duration },
    /// Game already ended; no more frames
    Stopped,
}

/// Rolling frames-per-second over the last 60 frame timestamps
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FrameStats {
    /// Record a frame timestamp in milliseconds; returns the current FPS
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest sample is the one we will overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                let intervals = (self.frame_times.len() - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Per-frame driver for a single game
pub struct FrameScheduler {
    state: GameState,
    input: InputState,
    /// The terminal frame has been reported to the host
    ended: bool,
    /// The game-over overlay has been drawn
    final_rendered: bool,
    stats: FrameStats,
}

impl FrameScheduler {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            input: InputState::default(),
            ended: false,
            final_rendered: false,
            stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Forward a key-down (`pressed`) or key-up event to the input tracker
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.handle_key(key, pressed)
    }

    /// Run one frame: update (player, opponent, ball) then draw the scene
    pub fn frame(&mut self, surface: &mut impl DrawSurface) -> FrameOutcome {
        if self.ended {
            return FrameOutcome::Stopped;
        }

        tick(&mut self.state, &self.input);
        for event in &self.state.events {
            log::trace!("frame {}: {:?}", self.state.frame, event);
        }
        draw_scene(&self.state, surface);

        if self.state.is_over() {
            self.ended = true;
            FrameOutcome::GameOver {
                delay: GAME_OVER_DELAY,
            }
        } else {
            FrameOutcome::Continue
        }
    }

    /// Draw the game-over screen. Only the first call after the game ends
    /// draws anything; returns whether it did.
    pub fn final_render(&mut self, surface: &mut impl DrawSurface) -> bool {
        if !self.ended || self.final_rendered {
            return false;
        }
        self.final_rendered = true;
        draw_game_over(&self.state, surface);
        true
    }

    /// Record a host frame timestamp (ms) for FPS tracking
    pub fn record_frame_time(&mut self, time_ms: f64) -> u32 {
        self.stats.record(time_ms)
    }
}
