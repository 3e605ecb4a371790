//! Render-ready snapshot of the game record.
//!
//! Everything here is derived from the record and the current instant on
//! every frame; nothing is cached between renders.

use crate::game::{GameState, Half, Team};
use crate::recording::{format_elapsed, Affordances, TimestampMark, CLOCK_PLACEHOLDER};

/// `1st`, `2nd`, `3rd`, otherwise `Nth`
pub fn ordinal(n: u32) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{}th", n),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InningRow {
    pub inning: u32,
    pub visitor: u32,
    pub home: u32,
    /// Batting team when this row is the current inning
    pub highlight: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRow {
    pub elapsed: String,
    pub context: String,
    pub wall_clock: String,
}

impl From<&TimestampMark> for MarkRow {
    fn from(mark: &TimestampMark) -> Self {
        Self {
            elapsed: mark.elapsed_formatted.clone(),
            context: mark.context(),
            wall_clock: mark.wall_clock_formatted.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardView {
    /// `Top of 1st`
    pub title: String,
    pub half: Half,
    /// Number of out indicators to fill
    pub outs: u8,
    pub run_cap: String,
    pub time_left: String,
    pub visitor_total: u32,
    pub home_total: u32,
    pub rows: Vec<InningRow>,
    pub affordances: Affordances,
    pub marks: Vec<MarkRow>,
    /// Recording clock as `H:MM:SS` once recording has started
    pub recording_elapsed: Option<String>,
    pub can_undo: bool,
}

impl ScoreboardView {
    /// Controls bar is drawn only while it has something to offer
    pub fn controls_shown(&self) -> bool {
        self.affordances.controls_visible && self.affordances.any()
    }

    pub fn new(state: &GameState, now: i64) -> Self {
        let current_team = state.batting_team();
        let rows = (1..=state.inning_rows() as u32)
            .map(|inning| InningRow {
                inning,
                visitor: state.runs_in(Team::Visitor, inning),
                home: state.runs_in(Team::Home, inning),
                highlight: (inning == state.inning).then_some(current_team),
            })
            .collect();

        let affordances = state.affordances(now);
        let marks = if affordances.marks_visible {
            state.timestamps.iter().map(MarkRow::from).collect()
        } else {
            Vec::new()
        };

        Self {
            title: format!("{} of {}", state.half.label(), ordinal(state.inning)),
            half: state.half,
            outs: state.outs.min(3),
            run_cap: if state.run_cap > 0 {
                state.run_cap.to_string()
            } else {
                CLOCK_PLACEHOLDER.to_string()
            },
            time_left: state.time_left_display(now),
            visitor_total: state.totals.visitor,
            home_total: state.totals.home,
            rows,
            affordances,
            marks,
            recording_elapsed: state.recording_elapsed_ms(now).map(format_elapsed),
            can_undo: !state.history.is_empty(),
        }
    }
}
