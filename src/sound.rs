//! Audible cues for game events.
//!
//! Playback is fire-and-forget. A cue that cannot be played is logged and
//! dropped; it never holds up the game.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// A named sound event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SoundCue {
    /// Any accepted move.
    Move,
    /// A player completed a line.
    Win,
    /// The board filled up without a winner.
    Tie,
}

/// Something that can play cues.
pub trait SoundPlayer: Send {
    /// Plays a cue. Must return promptly and swallow its own failures.
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, cue: SoundCue) {
        debug!(%cue, "Sound disabled");
    }
}

/// Rings the terminal bell: once for a move, twice for a win, three times
/// for a tie.
///
/// Rings are spaced [`TerminalBell::RING_GAP`] apart and consecutive cues are
/// separated by a longer pause, so a winning move (move, then win) is heard as
/// one ring followed by two. Terminals that rate-limit the bell may still
/// swallow some rings; configure a sound command for fully distinct cues.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell {
    next_free: Option<Instant>,
}

impl TerminalBell {
    /// Pause between the rings of one cue.
    pub const RING_GAP: Duration = Duration::from_millis(180);

    /// Pause between the last ring of a cue and the first ring of the next.
    pub const CUE_GAP: Duration = Duration::from_millis(450);

    fn rings(cue: SoundCue) -> u32 {
        match cue {
            SoundCue::Move => 1,
            SoundCue::Win => 2,
            SoundCue::Tie => 3,
        }
    }

    /// Reserves ring times for a cue, queued behind any cue still ringing.
    fn schedule(&mut self, cue: SoundCue, now: Instant) -> Vec<Instant> {
        let start = self.next_free.map_or(now, |free| free.max(now));
        let times: Vec<Instant> = (0..Self::rings(cue))
            .map(|i| start + Self::RING_GAP * i)
            .collect();
        self.next_free = times.last().map(|last| *last + Self::CUE_GAP);
        times
    }

    fn ring(cue: SoundCue) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!(error = %e, %cue, "Failed to ring terminal bell");
        }
    }
}

impl SoundPlayer for TerminalBell {
    #[instrument(skip(self))]
    fn play(&mut self, cue: SoundCue) {
        let times = self.schedule(cue, Instant::now());
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    for at in times {
                        tokio::time::sleep_until(at).await;
                        Self::ring(cue);
                    }
                });
            }
            Err(e) => warn!(error = %e, %cue, "No runtime to ring the terminal bell"),
        }
    }
}

/// Runs an external player command with the cue's sound file appended,
/// e.g. `paplay click.wav`.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    command: Vec<String>,
    move_file: Option<PathBuf>,
    win_file: Option<PathBuf>,
    tie_file: Option<PathBuf>,
}

impl CommandPlayer {
    /// Creates a player from a command line and per-cue sound files.
    pub fn new(
        command: Vec<String>,
        move_file: Option<PathBuf>,
        win_file: Option<PathBuf>,
        tie_file: Option<PathBuf>,
    ) -> Self {
        Self {
            command,
            move_file,
            win_file,
            tie_file,
        }
    }

    /// Sound file configured for a cue.
    pub fn file_for(&self, cue: SoundCue) -> Option<&PathBuf> {
        match cue {
            SoundCue::Move => self.move_file.as_ref(),
            SoundCue::Win => self.win_file.as_ref(),
            SoundCue::Tie => self.tie_file.as_ref(),
        }
    }
}

impl SoundPlayer for CommandPlayer {
    /// Spawns the player process without waiting for it.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    fn play(&mut self, cue: SoundCue) {
        let Some((program, args)) = self.command.split_first() else {
            warn!(%cue, "Sound command is empty");
            return;
        };
        let Some(file) = self.file_for(cue) else {
            warn!(%cue, "No sound file configured for cue");
            return;
        };
        if !file.exists() {
            warn!(%cue, file = %file.display(), "Sound file not found");
            return;
        }

        let spawned = tokio::process::Command::new(program)
            .args(args)
            .arg(file)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match spawned {
            Ok(_child) => debug!(%cue, file = %file.display(), "Sound started"),
            Err(e) => warn!(error = %e, %cue, program = %program, "Failed to start sound player"),
        }
    }
}
