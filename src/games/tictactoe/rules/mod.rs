//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the state
//! machine so the move selector can evaluate hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WIN_LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// A uniform line wins; otherwise a full board is a tie; otherwise the
/// game continues.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
