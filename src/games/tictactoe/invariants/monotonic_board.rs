//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameState, Player};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Each move must land on an empty cell, X first and alternating.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for pos in state.history() {
            let index = pos.to_index();
            if !reconstructed.is_empty(index) {
                return false;
            }
            reconstructed = reconstructed.with(index, Cell::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
