//! Undo log entries
//!
//! Every mutation the state machine performs is recorded as exactly one
//! `Event`, and every event knows how to reverse itself.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Half, Team, MAX_INNING};

/// Why a half-inning ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwitchReason {
    /// Batting team reached the run cap
    Cap,
    /// Third out recorded
    ThreeOuts,
}

/// Position in the game captured just before a half-inning switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorState {
    pub inning: u32,
    pub half: Half,
    pub outs: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// A run scored for `team` in `inning`
    Run { team: Team, inning: u32 },
    /// An out recorded in the current half
    Out,
    /// The half-inning changed
    Switch {
        reason: SwitchReason,
        prev: PriorState,
    },
}

impl Event {
    /// Whether reverting this entry leaves the game at a reachable position
    pub fn is_well_formed(&self) -> bool {
        let valid_inning = |inning: u32| (1..=MAX_INNING).contains(&inning);
        match *self {
            Event::Run { inning, .. } => valid_inning(inning),
            Event::Out => true,
            Event::Switch { prev, .. } => valid_inning(prev.inning) && prev.outs <= 3,
        }
    }

    /// Undo exactly the mutation this event recorded.
    pub fn revert(&self, state: &mut GameState) {
        match *self {
            Event::Run { team, inning } => {
                if let Some(runs) = inning
                    .checked_sub(1)
                    .and_then(|idx| state.innings.get_mut(team).get_mut(idx as usize))
                {
                    *runs = runs.saturating_sub(1);
                }
                let total = state.totals.get_mut(team);
                *total = total.saturating_sub(1);
            }
            Event::Out => {
                state.outs = state.outs.saturating_sub(1);
            }
            Event::Switch { prev, .. } => {
                state.inning = prev.inning;
                state.half = prev.half;
                state.outs = prev.outs;
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Event::Run { team, inning } => format!("run for {} in inning {}", team.label(), inning),
            Event::Out => "out".to_string(),
            Event::Switch {
                reason: SwitchReason::Cap,
                ..
            } => "half-inning switch (run cap)".to_string(),
            Event::Switch {
                reason: SwitchReason::ThreeOuts,
                ..
            } => "half-inning switch (three outs)".to_string(),
        }
    }
}
