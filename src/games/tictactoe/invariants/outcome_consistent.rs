//! Outcome consistency invariant: the stored outcome is the board's outcome.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: the outcome carried by the state equals evaluating its board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        evaluate(state.board()) == state.outcome()
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}
