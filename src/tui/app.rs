//! Application state and logic.
//!
//! `App` holds the current [`GameState`] and turns key presses into core
//! calls. It never mutates the game directly: every change is a new state
//! returned by [`GameState::apply_move`] or [`GameState::reset`].

use super::input::{digit_index, is_quit, move_cursor};
use super::mode::GameMode;
use crate::games::tictactoe::{GameState, Outcome, Player, Position, select_move};
use crate::sound::{SoundCue, SoundPlayer};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument, warn};

/// Marker the human plays against the computer.
pub const HUMAN: Player = Player::X;
/// Marker the computer plays.
pub const COMPUTER: Player = Player::O;

/// Main application state.
pub struct App {
    state: GameState,
    mode: Option<GameMode>,
    cursor: Position,
    status: String,
    awaiting_computer: bool,
    should_quit: bool,
    sound: Box<dyn SoundPlayer>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("cursor", &self.cursor)
            .field("awaiting_computer", &self.awaiting_computer)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates a new application waiting for the mode question.
    pub fn new(sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            state: GameState::new(),
            mode: None,
            cursor: Position::Center,
            status: Self::MODE_QUESTION.to_string(),
            awaiting_computer: false,
            should_quit: false,
            sound,
        }
    }

    /// Question asked at the start of every game.
    pub const MODE_QUESTION: &'static str = "Play against the computer? (y/n)";

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Chosen mode, `None` while the question is open.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True between a human move and the computer's answer.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            _ if is_quit(key) => {
                info!("Quit requested");
                self.should_quit = true;
            }
            _ if self.mode.is_none() => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.choose_mode(GameMode::from_answer(true))
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.choose_mode(GameMode::from_answer(false))
                }
                _ => debug!("Waiting for mode answer"),
            },
            KeyCode::Char('r') => self.reset(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play_human(self.cursor.to_index()),
            other => {
                if let Some(index) = digit_index(other) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.play_human(index);
                }
            }
        }
    }

    /// Answers the mode question and starts play.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self, mode: GameMode) {
        info!(mode = mode.name(), "Mode chosen");
        self.mode = Some(mode);
        self.status = self.turn_status();
    }

    /// Submits a human move at `index` for the player whose turn it is.
    ///
    /// Rejected moves and input arriving while the mode question is open or
    /// the computer is thinking are ignored.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) {
        let Some(mode) = self.mode else {
            debug!("Ignoring move before mode is chosen");
            return;
        };
        if self.awaiting_computer {
            debug!("Ignoring move while computer is thinking");
            return;
        }

        match self.state.apply_move(index) {
            Ok(next) => {
                self.accept(next);
                if mode == GameMode::HumanVsComputer && !self.state.is_over() {
                    self.awaiting_computer = true;
                    self.status = "Computer is thinking...".to_string();
                }
            }
            Err(e) => debug!(error = %e, "Move rejected"),
        }
    }

    /// Plays the computer's answer, if one is pending.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) {
        if !self.awaiting_computer {
            return;
        }
        self.awaiting_computer = false;

        let Some(index) = select_move(self.state.board(), COMPUTER, HUMAN) else {
            warn!("Computer found no free cell");
            return;
        };

        match self.state.apply_move(index) {
            Ok(next) => self.accept(next),
            Err(e) => warn!(error = %e, index, "Computer move rejected"),
        }
    }

    /// Starts a fresh game and asks the mode question again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Restarting game");
        self.state = self.state.reset();
        self.mode = None;
        self.awaiting_computer = false;
        self.cursor = Position::Center;
        self.status = Self::MODE_QUESTION.to_string();
    }

    fn accept(&mut self, next: GameState) {
        self.state = next;
        self.sound.play(SoundCue::Move);

        match self.state.outcome() {
            Outcome::Won(player) => {
                info!(%player, "Game won");
                self.sound.play(SoundCue::Win);
            }
            Outcome::Tie => {
                info!("Game tied");
                self.sound.play(SoundCue::Tie);
            }
            Outcome::InProgress => {}
        }
        self.status = self.turn_status();
    }

    fn turn_status(&self) -> String {
        match self.state.outcome() {
            Outcome::InProgress => format!("Turn: {}", self.state.turn()),
            outcome => format!("{} Press 'r' to play again or 'q' to quit.", outcome),
        }
    }
}
