//! Key press to intent mapping
//!
//! Lane changes only apply while running. During game over the restart key
//! is the only input that does anything.

use crate::sim::{GameState, GameStatus};

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Restart,
}

impl Intent {
    /// Map a `KeyboardEvent.key` value to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Intent::Left),
            "ArrowRight" => Some(Intent::Right),
            "r" | "R" => Some(Intent::Restart),
            _ => None,
        }
    }
}

/// Result of applying an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Wrong state, or a lane change past the edge
    Ignored,
    /// Player moved to `lane`
    Moved { lane: u8 },
    /// Game was reset; the frame loop must be resumed
    Restarted,
}

impl InputOutcome {
    #[inline]
    pub fn resumes_loop(self) -> bool {
        self == InputOutcome::Restarted
    }
}

/// Apply an intent to the game state
pub fn apply(state: &mut GameState, intent: Intent) -> InputOutcome {
    match (state.status, intent) {
        (GameStatus::GameOver, Intent::Restart) => {
            state.reset();
            InputOutcome::Restarted
        }
        (GameStatus::GameOver, _) | (GameStatus::Running, Intent::Restart) => InputOutcome::Ignored,
        (GameStatus::Running, Intent::Left | Intent::Right) => {
            let delta = if intent == Intent::Left { -1 } else { 1 };
            if state.shift_player(delta) {
                InputOutcome::Moved {
                    lane: state.player.lane,
                }
            } else {
                InputOutcome::Ignored
            }
        }
    }
}
