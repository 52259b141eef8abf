//! Ball physics, collision response and scoring
//!
//! Runs once per tick in a fixed order: move, wall bounce, paddle returns,
//! goals. Walls only flip the vertical velocity and never push the ball back
//! inside, so the ball may overlap the top or bottom edge for a frame.

use glam::Vec2;

use super::state::{GameEvent, GameState, Paddle, Side};
use crate::consts::*;

/// Advance the ball one tick and resolve walls, paddles and goals
pub fn update_ball(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if ball.top() < 0.0 || ball.bottom() > FIELD_HEIGHT {
        ball.vel.y = -ball.vel.y;
        log::trace!("Wall bounce at {:?}", ball.pos);
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        if paddle_contact(state, side) {
            let away = -state.ball.vel.x.signum();
            let vel = bounce_velocity(state.ball.pos.y, state.paddle(side), away);
            state.ball.vel = vel;
            log::debug!(
                "{:?} paddle return, new velocity {:?}",
                side,
                state.ball.vel
            );
            state.events.push(GameEvent::PaddleHit { side });
        }
    }

    if state.ball.left() < 0.0 {
        score_point(state, Side::Right);
    }
    if state.ball.right() > FIELD_WIDTH {
        score_point(state, Side::Left);
    }
}

/// Whether the ball's leading edge is in `side`'s paddle band with its
/// center inside the paddle span. Travel direction is not checked: a ball
/// still overlapping after a return is flipped again.
fn paddle_contact(state: &GameState, side: Side) -> bool {
    let ball = &state.ball;
    let paddle = state.paddle(side);
    let reached = match side {
        Side::Left => ball.left() < paddle.x + paddle.width,
        Side::Right => ball.right() > paddle.x,
    };
    reached && paddle.spans(ball.pos.y)
}

/// Post-return velocity for a ball struck at `ball_y`.
///
/// The hit offset from the paddle center, normalized to [-1, 1], maps
/// linearly onto a return angle of up to `MAX_BOUNCE_ANGLE`; speed is reset
/// to the base speed. `direction` is the sign of the outgoing horizontal
/// velocity.
pub fn bounce_velocity(ball_y: f32, paddle: &Paddle, direction: f32) -> Vec2 {
    let collide_point = (ball_y - paddle.center_y()) / (paddle.height / 2.0);
    let angle = MAX_BOUNCE_ANGLE * collide_point;
    Vec2::new(
        BALL_BASE_SPEED * angle.cos() * direction,
        BALL_BASE_SPEED * angle.sin(),
    )
}

fn score_point(state: &mut GameState, side: Side) {
    state.score.increment(side);
    let (left, right) = (state.score.left, state.score.right);
    log::info!("{:?} scores ({} - {})", side, left, right);
    state.events.push(GameEvent::Scored { side, left, right });
    state.reset_ball();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::field_center;
    use std::f32::consts::FRAC_PI_4;

    const EPS: f32 = 1e-4;

    fn state_with_ball(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(12345);
        state.ball.pos = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_free_flight() {
        let mut state = state_with_ball(Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0));
        update_ball(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(405.0, 305.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_top_wall_flips_vy_without_correction() {
        let mut state = state_with_ball(Vec2::new(400.0, 12.0), Vec2::new(5.0, -5.0));
        update_ball(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(405.0, 7.0));
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_bottom_wall_flips_vy() {
        let mut state = state_with_ball(Vec2::new(400.0, 588.0), Vec2::new(-5.0, 5.0));
        update_ball(&mut state);
        assert_eq!(state.ball.pos.y, 593.0);
        assert_eq!(state.ball.vel.y, -5.0);
    }

    #[test]
    fn test_center_strike_returns_flat() {
        let paddle = Paddle::new(Side::Left);
        let vel = bounce_velocity(paddle.center_y(), &paddle, 1.0);
        assert!(vel.y.abs() < EPS);
        assert!((vel.x - BALL_BASE_SPEED).abs() < EPS);
    }

    #[test]
    fn test_edge_strike_returns_at_max_angle() {
        let paddle = Paddle::new(Side::Right);
        let bottom = bounce_velocity(paddle.y + paddle.height, &paddle, -1.0);
        assert!((bottom.y - BALL_BASE_SPEED * FRAC_PI_4.sin()).abs() < EPS);
        assert!((bottom.x + BALL_BASE_SPEED * FRAC_PI_4.cos()).abs() < EPS);
        assert!((bottom.y - 3.5355).abs() < 1e-3);

        let top = bounce_velocity(paddle.y, &paddle, -1.0);
        assert!((top.y + BALL_BASE_SPEED * FRAC_PI_4.sin()).abs() < EPS);
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut state = GameState::new(1);
        let center = state.left.center_y();
        // Ball edge reaches x = 24 after the move, inside the paddle band
        state.ball.pos = Vec2::new(39.0, center);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        update_ball(&mut state);
        assert!((state.ball.vel.x - BALL_BASE_SPEED).abs() < EPS);
        assert!(state.ball.vel.y.abs() < EPS);
        assert_eq!(state.events, vec![GameEvent::PaddleHit { side: Side::Left }]);
    }

    #[test]
    fn test_right_paddle_returns_ball_downward_below_center() {
        let mut state = GameState::new(1);
        let y = state.right.center_y() + 25.0;
        state.ball.pos = Vec2::new(761.0, y);
        state.ball.vel = Vec2::new(5.0, 0.0);
        update_ball(&mut state);
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
        assert!((state.ball.vel.length() - BALL_BASE_SPEED).abs() < EPS);
    }

    #[test]
    fn test_ball_still_in_band_is_returned_again() {
        let mut state = GameState::new(1);
        let y = state.left.center_y() + 45.0;
        state.ball.pos = Vec2::new(36.0, y);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        // Steep return leaves |vx| < 5, so the ball is still in the band
        update_ball(&mut state);
        assert!((state.ball.vel.x - 3.8020).abs() < 1e-3);
        assert!((state.ball.vel.y - 3.2472).abs() < 1e-3);

        update_ball(&mut state);
        assert!(state.ball.left() < state.left.x + state.left.width);
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit { side: Side::Left }]);
    }

    #[test]
    fn test_ball_past_paddle_span_is_missed() {
        let mut state = GameState::new(1);
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(30.0, 400.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        update_ball(&mut state);
        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(state.score.left + state.score.right, 0);
    }

    #[test]
    fn test_left_goal_scores_for_right() {
        let mut state = state_with_ball(Vec2::new(12.0, 500.0), Vec2::new(-5.0, 5.0));
        state.left.y = 0.0;
        update_ball(&mut state);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel.x, 5.0);
        assert_eq!(state.ball.vel.y.abs(), BALL_BASE_SPEED);
        assert!(state.events.contains(&GameEvent::Scored {
            side: Side::Right,
            left: 0,
            right: 1
        }));
    }

    #[test]
    fn test_right_goal_scores_for_left() {
        let mut state = state_with_ball(Vec2::new(788.0, 100.0), Vec2::new(5.0, 0.0));
        state.right.y = 400.0;
        update_ball(&mut state);
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel.x, -5.0);
    }
}
