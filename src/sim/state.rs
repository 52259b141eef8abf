//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one `GameState` aggregate that
//! is passed by reference into each update step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A side reached the win score; nothing moves any more
    GameOver,
}

/// Which end of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human player
    Left,
    /// Scripted opponent
    Right,
}

/// Something that happened during a tick (drives logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball returned by a paddle
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// `side` scored; totals after the point
    Scored { side: Side, left: u32, right: u32 },
    /// Win score reached
    GameOver { winner: Side },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: field_center(),
            vel: Vec2::new(BALL_BASE_SPEED, BALL_BASE_SPEED),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A paddle; only its vertical position ever changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge, always within `[0, FIELD_HEIGHT - PADDLE_HEIGHT]`
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PLAYER_X,
            Side::Right => OPPONENT_X,
        };
        Self {
            side,
            x,
            y: (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move vertically by `dy`, then clamp into the field
    pub fn shift(&mut self, dy: f32) {
        self.y = crate::clamp_paddle_y(self.y + dy);
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// Points per side; only ever incremented by one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side that has reached `win_score`, if any
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Field center, where the ball starts and respawns
pub fn field_center() -> Vec2 {
    Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    /// Serve direction RNG
    rng: Pcg32,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub frame: u64,
    /// Player paddle
    pub left: Paddle,
    /// Opponent paddle
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            frame: 0,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(WIN_SCORE)
    }

    /// Serve again from the center: horizontal direction flips, vertical
    /// velocity is re-rolled to +/- base speed with even odds
    pub fn reset_ball(&mut self) {
        self.ball.pos = field_center();
        self.ball.vel.x = -self.ball.vel.x;
        self.ball.vel.y = if self.rng.random_bool(0.5) {
            BALL_BASE_SPEED
        } else {
            -BALL_BASE_SPEED
        };
    }
}
