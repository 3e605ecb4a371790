//! Scorekeeping state machine
//!
//! Tracks inning, half, outs and runs for both teams, with an undo log that
//! reverses one event per call.

mod event;
mod machine;
mod settings;
mod state;

pub use event::{Event, PriorState, SwitchReason};
pub use machine::{step, Play, StepOutcome};
pub use settings::GameSettings;
pub use state::{ByTeam, GameState, Half, InningLine, Team, MAX_INNING};
