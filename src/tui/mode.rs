//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the keyboard.
    HumanVsHuman,
    /// The human plays X, the computer answers as O.
    HumanVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Mode for a yes/no answer to "play against the computer?".
    pub fn from_answer(against_computer: bool) -> Self {
        if against_computer {
            GameMode::HumanVsComputer
        } else {
            GameMode::HumanVsHuman
        }
    }
}
