//! Game state record
//!
//! `GameState` is the single persisted record shared by the scoring state
//! machine and the recording subsystem. It serializes to one JSON blob.

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::settings::GameSettings;
use crate::recording::TimestampMark;

/// Which half of the inning is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// Visitor batting
    #[default]
    Top,
    /// Home batting
    Bottom,
}

impl Half {
    /// Team at bat during this half
    pub fn batting_team(self) -> Team {
        match self {
            Half::Top => Team::Visitor,
            Half::Bottom => Team::Home,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Half::Top => Half::Bottom,
            Half::Bottom => Half::Top,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Half::Top => "Top",
            Half::Bottom => "Bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Visitor,
    Home,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Visitor, Team::Home];

    pub fn label(self) -> &'static str {
        match self {
            Team::Visitor => "Visitor",
            Team::Home => "Home",
        }
    }
}

/// A value kept once per team
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ByTeam<T> {
    pub visitor: T,
    pub home: T,
}

impl<T> ByTeam<T> {
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Visitor => &self.visitor,
            Team::Home => &self.home,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Visitor => &mut self.visitor,
            Team::Home => &mut self.home,
        }
    }
}

/// Highest inning a saved record may reach before it is treated as garbage
pub const MAX_INNING: u32 = 999;

/// Runs per inning for one team; index `i` holds inning `i + 1`.
pub type InningLine = Vec<u32>;

/// The complete scorekeeping record.
///
/// Unknown fields are ignored and missing fields fall back to their defaults,
/// which keeps older saved blobs loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    /// Whether run cap and game length have been set for this game
    pub configured: bool,
    /// Current inning, starting at 1
    pub inning: u32,
    pub half: Half,
    /// Outs in the current half; a play reaching 3 switches halves before returning
    pub outs: u8,
    /// Runs allowed per half-inning, 0 = uncapped
    pub run_cap: u32,
    /// Length of the countdown, 0 = no timer
    #[serde(alias = "gameLengthMin")]
    pub game_length_minutes: u32,
    pub totals: ByTeam<u32>,
    pub innings: ByTeam<InningLine>,
    /// Undo log, most recent last
    pub history: Vec<Event>,

    pub recording_enabled: bool,
    pub recording_started: bool,
    /// Epoch milliseconds
    pub recording_start_time: Option<i64>,
    pub game_timer_started: bool,
    /// Epoch milliseconds
    #[serde(alias = "startTime")]
    pub game_start_time: Option<i64>,
    pub timestamps: Vec<TimestampMark>,
    /// Epoch milliseconds of the last accepted mark
    pub last_timestamp_time: Option<i64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(GameSettings::default())
    }
}

impl GameState {
    /// A brand-new game using the given preferences for cap, length and recording.
    pub fn fresh(settings: GameSettings) -> Self {
        Self {
            configured: false,
            inning: 1,
            half: Half::Top,
            outs: 0,
            run_cap: settings.run_cap,
            game_length_minutes: settings.game_length_minutes,
            totals: ByTeam::default(),
            innings: ByTeam {
                visitor: vec![0],
                home: vec![0],
            },
            history: Vec::new(),
            recording_enabled: settings.recording_enabled,
            recording_started: false,
            recording_start_time: None,
            game_timer_started: false,
            game_start_time: None,
            timestamps: Vec::new(),
            last_timestamp_time: None,
        }
    }

    pub fn batting_team(&self) -> Team {
        self.half.batting_team()
    }

    /// Current cap/length/recording values as settings
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            run_cap: self.run_cap,
            game_length_minutes: self.game_length_minutes,
            recording_enabled: self.recording_enabled,
        }
    }

    /// Pad both inning lines with zeros so they cover the current inning.
    pub fn ensure_inning_lines(&mut self) {
        let len = self.inning as usize;
        for team in Team::ALL {
            let line = self.innings.get_mut(team);
            if line.len() < len {
                line.resize(len, 0);
            }
        }
    }

    /// Runs scored by `team` in the given 1-based inning.
    pub fn runs_in(&self, team: Team, inning: u32) -> u32 {
        inning
            .checked_sub(1)
            .and_then(|idx| self.innings.get(team).get(idx as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Number of inning rows a scoreboard needs to show
    pub fn inning_rows(&self) -> usize {
        self.innings
            .visitor
            .len()
            .max(self.innings.home.len())
            .max(self.inning as usize)
    }

    /// Repair structural problems a loaded record may carry.
    ///
    /// Returns false when the record cannot be used at all. Undo entries that
    /// would rewind to an impossible position are dropped.
    pub fn normalize(&mut self) -> bool {
        if !(1..=MAX_INNING).contains(&self.inning) {
            return false;
        }
        let longest = self.innings.visitor.len().max(self.innings.home.len());
        if longest > MAX_INNING as usize {
            return false;
        }

        let logged = self.history.len();
        self.history.retain(Event::is_well_formed);
        if self.history.len() < logged {
            tracing::warn!(
                dropped = logged - self.history.len(),
                "Dropped malformed undo entries"
            );
        }

        self.outs = self.outs.min(3);
        self.ensure_inning_lines();
        for team in Team::ALL {
            let sum: u32 = self.innings.get(team).iter().sum();
            *self.totals.get_mut(team) = sum;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert_eq!(state.inning, 1);
        assert_eq!(state.half, Half::Top);
        assert_eq!(state.outs, 0);
        assert_eq!(state.innings.visitor, vec![0]);
        assert_eq!(state.innings.home, vec![0]);
        assert!(state.history.is_empty());
        assert!(!state.configured);
        assert_eq!(state.run_cap, 6);
        assert_eq!(state.game_length_minutes, 60);
        assert!(state.recording_enabled);
    }

    #[test]
    fn test_batting_team_follows_half() {
        assert_eq!(Half::Top.batting_team(), Team::Visitor);
        assert_eq!(Half::Bottom.batting_team(), Team::Home);
        assert_eq!(Half::Top.flipped(), Half::Bottom);
    }

    #[test]
    fn test_ensure_inning_lines_pads_without_truncating() {
        let mut state = GameState::default();
        state.innings.home = vec![1, 2, 3, 4];
        state.inning = 3;
        state.ensure_inning_lines();
        assert_eq!(state.innings.visitor, vec![0, 0, 0]);
        assert_eq!(state.innings.home, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_runs_in_out_of_range() {
        let state = GameState::default();
        assert_eq!(state.runs_in(Team::Home, 0), 0);
        assert_eq!(state.runs_in(Team::Home, 9), 0);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(json["half"], "top");
        assert_eq!(json["runCap"], 6);
        assert_eq!(json["gameLengthMinutes"], 60);
        assert_eq!(json["innings"]["visitor"], serde_json::json!([0]));
        assert!(json["recordingStartTime"].is_null());
    }

    #[test]
    fn test_legacy_field_names_are_accepted() {
        let blob = r#"{
            "started": false,
            "startTime": 1700000000000,
            "gameLengthMin": 45,
            "runCap": 5,
            "inning": 2,
            "half": "bottom",
            "outs": 1,
            "totals": {"visitor": 3, "home": 1},
            "innings": {"visitor": [2, 1], "home": [1]},
            "history": [{"type": "run", "team": "home", "inning": 1}],
            "gameTimerStarted": true,
            "lastTimestampTime": 0
        }"#;
        let mut state: GameState = serde_json::from_str(blob).unwrap();
        assert!(state.normalize());
        assert_eq!(state.game_length_minutes, 45);
        assert_eq!(state.game_start_time, Some(1_700_000_000_000));
        assert_eq!(state.half, Half::Bottom);
        assert_eq!(state.innings.home, vec![1, 0]);
        assert_eq!(state.totals.visitor, 3);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_normalize_rejects_zero_inning() {
        let mut state = GameState {
            inning: 0,
            ..GameState::default()
        };
        assert!(!state.normalize());
    }

    #[test]
    fn test_normalize_rejects_runaway_inning() {
        let mut state = GameState {
            inning: MAX_INNING + 1,
            ..GameState::default()
        };
        assert!(!state.normalize());

        let mut long_line = GameState::default();
        long_line.innings.home = vec![0; MAX_INNING as usize + 1];
        assert!(!long_line.normalize());

        let mut last_inning = GameState {
            inning: MAX_INNING,
            ..GameState::default()
        };
        assert!(last_inning.normalize());
        assert_eq!(last_inning.inning_rows(), MAX_INNING as usize);
    }

    #[test]
    fn test_normalize_drops_impossible_undo_entries() {
        use crate::game::{PriorState, SwitchReason};

        let mut state = GameState::default();
        state.history = vec![
            Event::Run {
                team: Team::Visitor,
                inning: 0,
            },
            Event::Out,
            Event::Switch {
                reason: SwitchReason::Cap,
                prev: PriorState {
                    inning: 0,
                    half: Half::Top,
                    outs: 0,
                },
            },
            Event::Switch {
                reason: SwitchReason::ThreeOuts,
                prev: PriorState {
                    inning: 1,
                    half: Half::Top,
                    outs: 9,
                },
            },
        ];
        assert!(state.normalize());
        assert_eq!(state.history, vec![Event::Out]);
    }

    #[test]
    fn test_normalize_recomputes_totals() {
        let mut state = GameState::default();
        state.innings.visitor = vec![2, 3];
        state.totals.visitor = 99;
        state.outs = 7;
        assert!(state.normalize());
        assert_eq!(state.totals.visitor, 5);
        assert_eq!(state.outs, 3);
    }
}
