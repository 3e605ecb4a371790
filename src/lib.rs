pub mod config;
pub mod core;
pub mod data;
pub mod game;
pub mod recording;
pub mod report;
pub mod ui;
pub mod util;

pub use config::Config;
pub use crate::core::{Command, Effect, Scorekeeper};
pub use data::{AppStateStore, Database, GameStore, KeyValueStore, MemoryStore};
pub use game::{step, GameSettings, GameState, Half, Play, StepOutcome, Team};
pub use recording::{Affordances, MarkOutcome, TimestampMark};
pub use ui::App;
pub use util::{Clock, ManualClock, SystemClock};
