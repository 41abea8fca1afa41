//! The board state machine.
//!
//! `InProgress(turn)` starts at X. `Won` and `Tie` are terminal; only
//! [`reset`] leaves them.

use super::action::MoveError;
use super::invariants::{InvariantSet, StateInvariants};
use super::rules::evaluate;
use super::{Cell, GameState, Position};
use tracing::{debug, instrument};

impl GameState {
    /// Applies a move for the player whose turn it is.
    ///
    /// Returns the next state with its outcome already evaluated. The turn
    /// flips only when the game continues, so a finished state still names
    /// the player who made the final move.
    #[instrument(skip(self), fields(turn = %self.turn, board = %self.board.to_compact()))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        if self.outcome.is_terminal() {
            return Err(MoveError::GameAlreadyOver(self.outcome));
        }

        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        let board = self.board.with(index, Cell::Occupied(self.turn));
        let outcome = evaluate(&board);
        let turn = if outcome.is_terminal() {
            self.turn
        } else {
            self.turn.opponent()
        };
        let mut history = self.history.clone();
        history.push(position);

        let next = GameState {
            board,
            turn,
            outcome,
            history,
        };

        debug_assert!(
            StateInvariants::check_all(&next).is_ok(),
            "Invariant violation after move: {:?}",
            StateInvariants::check_all(&next)
        );

        debug!(%position, ?outcome, "Move applied");
        Ok(next)
    }

    /// Empty cells in ascending index order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.empty_cells().collect()
    }

    /// The canonical initial state, whatever `self` is.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        GameState::new()
    }
}

/// Applies a move to `state`. See [`GameState::apply_move`].
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    state.apply_move(index)
}

/// Empty cells of `state` in ascending order.
pub fn legal_moves(state: &GameState) -> Vec<usize> {
    state.legal_moves()
}

/// A fresh game: empty board, X to move.
pub fn reset() -> GameState {
    GameState::new()
}

/// Plays `moves` from the initial state, stopping at the first rejection.
#[instrument]
pub fn replay(moves: &[usize]) -> Result<GameState, MoveError> {
    moves
        .iter()
        .try_fold(GameState::new(), |state, &index| state.apply_move(index))
}
