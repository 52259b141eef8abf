//! Canvas Pong - classic two-paddle Pong against a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, physics, collisions, opponent)
//! - `renderer`: Drawing surface abstraction, scene drawing and WebGPU backend
//! - `scheduler`: Per-frame update/render sequencing and game-over handoff
//! - `settings`: Host-side settings (seed, logging, native pacing)

pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use scheduler::{FrameOutcome, FrameScheduler, FrameStats};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Field dimensions (matches the drawing surface)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const PLAYER_X: f32 = PADDLE_MARGIN;
    pub const OPPONENT_X: f32 = FIELD_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN;

    /// Player paddle step per frame while a direction is held
    pub const PLAYER_STEP: f32 = 7.0;
    /// Scripted opponent step per frame
    pub const OPPONENT_STEP: f32 = 6.0;
    /// Opponent does nothing while its center is within this distance of the ball
    pub const OPPONENT_DEAD_ZONE: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Steepest return angle, reached at the paddle edge
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// First side to reach this score wins
    pub const WIN_SCORE: u32 = 5;
    /// Delay between the terminal frame and the game-over overlay
    pub const GAME_OVER_DELAY: Duration = Duration::from_millis(500);
}

/// Clamp a paddle's top edge so the paddle stays inside the field
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, consts::FIELD_HEIGHT - consts::PADDLE_HEIGHT)
}
