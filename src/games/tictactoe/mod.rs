//! Tic-tac-toe: board state machine and computer move selection.

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod selector;
mod types;

pub use action::MoveError;
pub use game::{apply_move, legal_moves, replay, reset};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, OutcomeConsistentInvariant, StateInvariants,
};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, evaluate, is_full, is_tie};
pub use selector::{PREFERENCE, select_move};
pub use types::{Board, BoardParseError, Cell, GameState, Outcome, Player};
