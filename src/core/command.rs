use std::time::Duration;

use crate::game::{GameSettings, Play};

/// A scorekeeper request handled by [`super::Scorekeeper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run, out or undo
    Play(Play),
    /// Start over. Callers confirm with the user first.
    NewGame,
    /// Values from the settings form
    Configure(GameSettings),
    StartGameTimer,
    StartRecording,
    MarkTimestamp,
}

/// Side effects that should be executed outside the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Redraw once after `delay`, replacing any pending redraw
    ScheduleCooldownRedraw(Duration),
    /// Drop any pending one-shot redraw
    CancelCooldownRedraw,
    /// Show the settings form
    OpenSettings,
}
