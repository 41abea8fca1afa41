//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first uniform line in [`WIN_LINES`] order,
/// `None` otherwise.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for index in line {
                board = board.with(index, Cell::Occupied(Player::O));
            }
            assert_eq!(check_winner(&board), Some(Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O_X_OX__O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
