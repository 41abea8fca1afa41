//! Move rejection reasons.
//!
//! Rejections are expected from ordinary stray input (a press on a filled
//! cell, a key after the game ended). They are values, never panics.

use super::{Outcome, Position};

/// Why a move request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or tied.
    #[display("Game is already over: {}", _0)]
    GameAlreadyOver(Outcome),
}

impl std::error::Error for MoveError {}
