//! Tie detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
