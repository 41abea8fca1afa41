//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the turn marker agrees with the history length.
///
/// While the game continues, X is to move after an even number of moves.
/// Once terminal, the marker names whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let moves = state.history().len();
        let next = if moves % 2 == 0 { Player::X } else { Player::O };

        if state.is_over() {
            moves > 0 && state.turn() == next.opponent()
        } else {
            state.turn() == next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
