//! Caro - tic-tac-toe for the terminal
//!
//! Two players share the keyboard, or one plays X against a computer
//! opponent that picks O's moves with a one-ply heuristic.
//!
//! # Architecture
//!
//! - **Games**: the board state machine and the move selector. Pure, no I/O.
//! - **Sound**: audible cues for moves, wins and ties.
//! - **Config**: `caro.toml` settings.
//! - **TUI**: the ratatui shell that drives the core.
//!
//! # Example
//!
//! ```
//! use caro::{GameState, Outcome, Player, select_move};
//!
//! let state = GameState::new().apply_move(0).unwrap();
//! let reply = select_move(state.board(), Player::O, Player::X);
//! assert_eq!(reply, Some(4));
//!
//! let state = state.apply_move(4).unwrap();
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! assert_eq!(state.turn(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod sound;
mod tui;

// Crate-level exports - Configuration
pub use config::{CaroConfig, ConfigError, GameSettings, SoundSettings};

// Crate-level exports - Sound
pub use sound::{CommandPlayer, Silent, SoundCue, SoundPlayer, TerminalBell};

// Crate-level exports - TUI
pub use tui::{App, COMPUTER, GameMode, HUMAN, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Cell, GameState, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, MoveError, Outcome, OutcomeConsistentInvariant,
    PREFERENCE, Player, Position, StateInvariants, WIN_LINES, apply_move, check_winner, evaluate,
    is_full, is_tie, legal_moves, replay, reset, select_move,
};
