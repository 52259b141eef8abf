//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, fixed per-frame steps
//! - Seeded RNG only
//! - Fixed update order: player, opponent, ball
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{bounce_velocity, update_ball};
pub use input::{Action, InputState, Key};
pub use opponent::{OpponentMove, steer_toward};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{move_player, tick};
