//! Per-game preferences supplied by the settings form

use serde::{Deserialize, Serialize};

/// Run cap, game length and recording preference for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// 0 = uncapped
    pub run_cap: u32,
    /// 0 = no countdown
    pub game_length_minutes: u32,
    pub recording_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            run_cap: 6,
            game_length_minutes: 60,
            recording_enabled: true,
        }
    }
}

impl GameSettings {
    /// Build settings from raw form input.
    ///
    /// Anything that is not a non-negative integer becomes 0, which reads as
    /// "uncapped" for the run cap and "no timer" for the length.
    pub fn from_input(run_cap: &str, game_length_minutes: &str, recording_enabled: bool) -> Self {
        Self {
            run_cap: coerce_count(run_cap),
            game_length_minutes: coerce_count(game_length_minutes),
            recording_enabled,
        }
    }
}

fn coerce_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
