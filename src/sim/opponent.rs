//! Scripted opponent
//!
//! A dead-zone controller: steps toward the ball's current height and does
//! nothing while the ball is within the tolerance band. It never predicts,
//! so it misses on purpose every so often.

use super::state::{GameState, Paddle, Side};
use crate::consts::{OPPONENT_DEAD_ZONE, OPPONENT_STEP};

/// Decision for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    Up,
    Down,
    Hold,
}

/// Decide which way a paddle should step to follow `target_y`
pub fn decide(paddle: &Paddle, target_y: f32) -> OpponentMove {
    let center = paddle.center_y();
    if center < target_y - OPPONENT_DEAD_ZONE {
        OpponentMove::Down
    } else if center > target_y + OPPONENT_DEAD_ZONE {
        OpponentMove::Up
    } else {
        OpponentMove::Hold
    }
}

/// Step `side`'s paddle toward the ball and clamp it into the field
pub fn steer_toward(state: &mut GameState, side: Side) -> OpponentMove {
    let target_y = state.ball.pos.y;
    let paddle = state.paddle_mut(side);
    let decision = decide(paddle, target_y);
    match decision {
        OpponentMove::Down => paddle.shift(OPPONENT_STEP),
        OpponentMove::Up => paddle.shift(-OPPONENT_STEP),
        OpponentMove::Hold => {}
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_holds_inside_dead_zone() {
        let mut state = GameState::new(1);
        let center = state.right.center_y();
        for offset in [-20.0, -10.0, 0.0, 15.0, 20.0] {
            state.ball.pos.y = center + offset;
            let before = state.right.y;
            assert_eq!(steer_toward(&mut state, Side::Right), OpponentMove::Hold);
            assert_eq!(state.right.y, before);
        }
    }

    #[test]
    fn test_moves_down_toward_lower_ball() {
        let mut state = GameState::new(1);
        state.ball.pos.y = state.right.center_y() + 21.0;
        let before = state.right.y;
        assert_eq!(steer_toward(&mut state, Side::Right), OpponentMove::Down);
        assert_eq!(state.right.y, before + OPPONENT_STEP);
    }

    #[test]
    fn test_moves_up_toward_higher_ball() {
        let mut state = GameState::new(1);
        state.ball.pos.y = state.right.center_y() - 21.0;
        let before = state.right.y;
        assert_eq!(steer_toward(&mut state, Side::Right), OpponentMove::Up);
        assert_eq!(state.right.y, before - OPPONENT_STEP);
    }

    #[test]
    fn test_clamped_at_edges() {
        let mut state = GameState::new(1);
        state.right.y = 2.0;
        state.ball.pos.y = -500.0;
        steer_toward(&mut state, Side::Right);
        assert_eq!(state.right.y, 0.0);

        state.right.y = FIELD_HEIGHT - PADDLE_HEIGHT - 1.0;
        state.ball.pos.y = 5000.0;
        steer_toward(&mut state, Side::Right);
        assert_eq!(state.right.y, FIELD_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_only_touches_its_own_paddle() {
        let mut state = GameState::new(1);
        state.ball.pos.y = 10.0;
        let left_before = state.left.y;
        let ball_before = state.ball.pos;
        steer_toward(&mut state, Side::Right);
        assert_eq!(state.left.y, left_before);
        assert_eq!(state.ball.pos, ball_before);
    }
}
