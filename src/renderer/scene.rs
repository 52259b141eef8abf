//! Scene drawing
//!
//! Pure functions of the game state; the only thing read from the surface
//! is its size.

use super::DrawSurface;
use super::vertex::colors;
use crate::sim::{GameState, Side};

/// Dashed net: one dash every `NET_SPACING` units
const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 20.0;
const NET_SPACING: f32 = 30.0;

const SCORE_SIZE: f32 = 40.0;
const SCORE_BASELINE: f32 = 50.0;
const RESULT_SIZE: f32 = 48.0;
const HINT_SIZE: f32 = 24.0;

pub const PLAYER_WINS: &str = "You Win!";
pub const OPPONENT_WINS: &str = "AI Wins!";
pub const RESTART_HINT: &str = "Refresh to play again";

/// Background, net, scores, paddles and ball
pub fn draw_scene(state: &GameState, surface: &mut impl DrawSurface) {
    let (width, height) = surface.size();

    surface.fill_rect(0.0, 0.0, width, height, colors::BACKGROUND);

    let mut y = 0.0;
    while y < height {
        surface.fill_rect(width / 2.0 - NET_WIDTH / 2.0, y, NET_WIDTH, NET_DASH, colors::NET);
        y += NET_SPACING;
    }

    surface.draw_text(
        &state.score.left.to_string(),
        width / 4.0,
        SCORE_BASELINE,
        colors::SCORE,
        SCORE_SIZE,
    );
    surface.draw_text(
        &state.score.right.to_string(),
        3.0 * width / 4.0,
        SCORE_BASELINE,
        colors::SCORE,
        SCORE_SIZE,
    );

    for (paddle, color) in [
        (&state.left, colors::PLAYER_PADDLE),
        (&state.right, colors::OPPONENT_PADDLE),
    ] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);
}

/// The scene plus the winner message and restart hint
pub fn draw_game_over(state: &GameState, surface: &mut impl DrawSurface) {
    draw_scene(state, surface);

    let (width, height) = surface.size();
    let leader = if state.score.left > state.score.right {
        Side::Left
    } else {
        Side::Right
    };
    surface.draw_text(
        winner_message(leader),
        width / 2.0 - 120.0,
        height / 2.0,
        colors::OVERLAY_TEXT,
        RESULT_SIZE,
    );
    surface.draw_text(
        RESTART_HINT,
        width / 2.0 - 110.0,
        height / 2.0 + 40.0,
        colors::OVERLAY_TEXT,
        HINT_SIZE,
    );
}

/// Message shown for a winner
pub fn winner_message(side: Side) -> &'static str {
    match side {
        Side::Left => PLAYER_WINS,
        Side::Right => OPPONENT_WINS,
    }
}
