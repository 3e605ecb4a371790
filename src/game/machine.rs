//! Scoring state machine
//!
//! User input arrives as a [`Play`]. [`step`] applies it and reports which
//! events were appended to the undo log. Half-inning switches are never
//! requested directly: they follow from a run reaching the cap or an out
//! being the third, and land in the log right after the play that caused them.
//! Undoing such a play therefore takes two steps, first the switch and then
//! the run or out itself.

use super::event::{Event, PriorState, SwitchReason};
use super::settings::GameSettings;
use super::state::{GameState, Half};

/// A scorekeeper action on the scoring state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    Run,
    Out,
    Undo,
}

/// Result of applying a [`Play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Events appended to the history, in order
    Recorded(Vec<Event>),
    /// The event popped from the history and reversed
    Undone(Event),
    /// Nothing changed (undo with an empty history)
    Unchanged,
}

impl StepOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, StepOutcome::Unchanged)
    }
}

/// Transition function for the scoring state.
pub fn step(state: &mut GameState, play: Play) -> StepOutcome {
    match play {
        Play::Run => StepOutcome::Recorded(state.record_run()),
        Play::Out => StepOutcome::Recorded(state.record_out()),
        Play::Undo => state
            .undo()
            .map_or(StepOutcome::Unchanged, StepOutcome::Undone),
    }
}

impl GameState {
    /// Score a run for the batting team in the current inning.
    pub fn record_run(&mut self) -> Vec<Event> {
        self.ensure_inning_lines();
        let team = self.batting_team();
        let inning = self.inning;
        let Some(slot) = inning
            .checked_sub(1)
            .and_then(|idx| self.innings.get_mut(team).get_mut(idx as usize))
        else {
            tracing::warn!(inning, "Run ignored outside any inning");
            return Vec::new();
        };
        *slot += 1;
        let runs = *slot;
        *self.totals.get_mut(team) += 1;

        let run = Event::Run { team, inning };
        self.history.push(run);
        let mut events = vec![run];

        if self.run_cap > 0 && runs >= self.run_cap {
            events.push(self.switch_half(SwitchReason::Cap));
        }

        tracing::debug!(team = team.label(), inning, runs, "Run recorded");
        events
    }

    /// Record an out; the third out ends the half-inning.
    pub fn record_out(&mut self) -> Vec<Event> {
        self.outs = (self.outs + 1).min(3);
        self.history.push(Event::Out);
        let mut events = vec![Event::Out];

        if self.outs >= 3 {
            events.push(self.switch_half(SwitchReason::ThreeOuts));
        }

        tracing::debug!(outs = self.outs, inning = self.inning, "Out recorded");
        events
    }

    fn switch_half(&mut self, reason: SwitchReason) -> Event {
        let prev = PriorState {
            inning: self.inning,
            half: self.half,
            outs: self.outs,
        };

        if self.half == Half::Bottom {
            self.inning = self.inning.saturating_add(1);
        }
        self.half = self.half.flipped();
        self.outs = 0;
        self.ensure_inning_lines();

        let event = Event::Switch { reason, prev };
        self.history.push(event);

        tracing::info!(
            ?reason,
            inning = self.inning,
            half = self.half.label(),
            "Half-inning switched"
        );
        event
    }

    /// Reverse the most recent event. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Event> {
        let event = self.history.pop()?;
        event.revert(self);
        tracing::info!(event = %event.describe(), "Undid event");
        Some(event)
    }

    /// Throw away the current game and start over with `defaults`.
    pub fn new_game(&mut self, defaults: GameSettings) {
        *self = GameState::fresh(defaults);
        tracing::info!("Started new game");
    }

    /// Apply settings from the settings form. No timer is started here.
    pub fn configure(&mut self, settings: GameSettings) {
        self.run_cap = settings.run_cap;
        self.game_length_minutes = settings.game_length_minutes;
        self.recording_enabled = settings.recording_enabled;
        self.configured = true;

        if !self.game_timer_started {
            self.game_start_time = None;
        }

        tracing::info!(
            run_cap = self.run_cap,
            game_length_minutes = self.game_length_minutes,
            recording_enabled = self.recording_enabled,
            "Game configured"
        );
    }
}
