//! Computer move selection.
//!
//! A one-ply heuristic in strict priority order:
//! 1. complete a line for the computer,
//! 2. block a line the opponent would complete next move,
//! 3. take the first free cell of [`PREFERENCE`].
//!
//! Forks are not detected: a human who creates two threats at once wins.

use super::rules::check_winner;
use super::{Board, Cell, Player};
use tracing::{debug, instrument};

/// Positional preference: center, corners, then edges.
pub const PREFERENCE: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Picks a cell for `computer`, or `None` when the board is full.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn select_move(board: &Board, computer: Player, opponent: Player) -> Option<usize> {
    if let Some(index) = completing_cell(board, computer) {
        debug!(index, "Taking the win");
        return Some(index);
    }

    if let Some(index) = completing_cell(board, opponent) {
        debug!(index, "Blocking opponent");
        return Some(index);
    }

    let index = PREFERENCE.iter().copied().find(|&i| board.is_empty(i));
    debug!(?index, "Positional choice");
    index
}

/// First empty cell (ascending) that wins immediately for `player`.
fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    board.empty_cells().find(|&index| {
        let trial = board.with(index, Cell::Occupied(player));
        check_winner(&trial) == Some(player)
    })
}
