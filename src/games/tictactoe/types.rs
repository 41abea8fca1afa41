//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (moves first).
    #[default]
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell owned by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns a copy of the board with `index` set to `cell`.
    ///
    /// Out-of-range indices leave the board unchanged.
    pub fn with(mut self, index: usize, cell: Cell) -> Self {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
        self
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Iterates over empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Compact one-line form, e.g. `XX_OO____`.
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing the compact board form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Not exactly nine cells.
    #[display("Board needs 9 cells, got {}", _0)]
    WrongLength(usize),
    /// A character that is neither a marker nor an empty cell.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` (any case) and `_`, `.` or space for empty cells.
    /// Commas and `|` are ignored so rows can be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !matches!(c, ',' | '|')).collect();
        if symbols.len() != 9 {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (slot, symbol) in cells.iter_mut().zip(symbols) {
            *slot = match symbol {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '_' | '.' | ' ' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self { cells })
    }
}

impl std::error::Error for BoardParseError {}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    #[default]
    InProgress,
    /// Player completed a line.
    Won(Player),
    /// Board full with no winner.
    Tie,
}

impl Outcome {
    /// Returns true for `Won` and `Tie`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "Tie!"),
        }
    }
}

/// Complete game state.
///
/// Values are immutable from the outside: every accepted move produces a new
/// state through `apply_move`, and `reset` replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn: Player,
    pub(super) outcome: Outcome,
    pub(super) history: Vec<Position>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the player who made the final move
    /// once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }
}
