//! Per-frame simulation tick
//!
//! Advances the game one display frame: player paddle, scripted opponent,
//! then ball physics and the win check.

use super::collision::update_ball;
use super::input::{Action, InputState};
use super::opponent::steer_toward;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Apply held keys to the player paddle. Up is applied before down, so
/// holding both leaves the paddle where it was (unless it started against
/// an edge).
pub fn move_player(state: &mut GameState, input: &InputState) {
    if input.is_active(Action::MoveUp) {
        state.left.y -= PLAYER_STEP;
    }
    if input.is_active(Action::MoveDown) {
        state.left.y += PLAYER_STEP;
    }
    state.left.y = crate::clamp_paddle_y(state.left.y);
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &InputState) {
    state.events.clear();

    // Terminal: nothing moves any more
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;

    move_player(state, input);
    steer_toward(state, Side::Right);
    update_ball(state);

    if let Some(winner) = state.winner() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { winner });
        log::info!(
            "Game over after {} frames: {:?} wins {} - {}",
            state.frame,
            winner,
            state.score.left,
            state.score.right
        );
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn input_from_bits(bits: u8) -> InputState {
        InputState {
            up_arrow: bits & 1 != 0,
            down_arrow: bits & 2 != 0,
            w: bits & 4 != 0,
            s: bits & 8 != 0,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn paddles_stay_in_field(seed in any::<u64>(), keys in prop::collection::vec(0u8..16, 1..400)) {
            let mut state = GameState::new(seed);
            for (i, bits) in keys.iter().cycle().take(3000).enumerate() {
                tick(&mut state, &input_from_bits(*bits));
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.y >= 0.0, "frame {}: y = {}", i, paddle.y);
                    prop_assert!(paddle.y <= FIELD_HEIGHT - PADDLE_HEIGHT, "frame {}: y = {}", i, paddle.y);
                }
            }
        }

        #[test]
        fn scores_only_step_by_one(seed in any::<u64>(), keys in prop::collection::vec(0u8..16, 1..400)) {
            let mut state = GameState::new(seed);
            for bits in keys.iter().cycle().take(5000) {
                let before = state.score;
                tick(&mut state, &input_from_bits(*bits));
                let scored = state
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::Scored { .. }))
                    .count() as u32;
                let gained = (state.score.left - before.left) + (state.score.right - before.right);
                prop_assert!(state.score.left >= before.left);
                prop_assert!(state.score.right >= before.right);
                prop_assert_eq!(gained, scored);
                prop_assert!(gained <= 1);
                if scored == 1 {
                    prop_assert_eq!(state.ball.pos, crate::sim::state::field_center());
                }
            }
        }

        #[test]
        fn opponent_holds_in_dead_zone(offset in -19.5f32..19.5, top in 0.0f32..=500.0) {
            let mut state = GameState::new(0);
            state.right.y = top;
            state.ball.pos.y = state.right.center_y() + offset;
            crate::sim::opponent::steer_toward(&mut state, Side::Right);
            prop_assert_eq!(state.right.y, top);
        }
    }
}
