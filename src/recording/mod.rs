//! Recording and game-clock subsystem
//!
//! Two optional clocks hang off the game record: a countdown for timed games
//! and a recording clock used to stamp notable moments. Both store an absolute
//! start instant and compute elapsed time against "now" on demand, so a
//! suspended process shows the right value as soon as it redraws.

mod format;

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Half};

pub use format::{format_elapsed, format_remaining, format_wall_clock};

/// Minimum spacing between two accepted marks
pub const MARK_COOLDOWN_MS: i64 = 10_000;

/// Placeholder shown instead of a clock value
pub const CLOCK_PLACEHOLDER: &str = "—";

/// A marked moment in the recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampMark {
    /// Recording time as `H:MM:SS`
    #[serde(alias = "time")]
    pub elapsed_formatted: String,
    #[serde(alias = "elapsed")]
    pub elapsed_ms: i64,
    #[serde(alias = "realTime")]
    pub wall_clock_formatted: String,
    pub inning: u32,
    pub half: Half,
}

impl TimestampMark {
    /// `Top 3` / `Bottom 1`
    pub fn context(&self) -> String {
        format!("{} {}", self.half.label(), self.inning)
    }
}

/// Result of a mark request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked(TimestampMark),
    /// Recording has not been started
    NotRecording,
    /// Too soon after the previous mark
    CoolingDown { remaining_ms: i64 },
}

/// Which recording controls can be offered right now.
///
/// Derived from the record and the current instant on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub start_recording: bool,
    pub start_game_timer: bool,
    pub mark: bool,
    /// The timer controls area is shown at all
    pub controls_visible: bool,
    /// The list of marks is shown
    pub marks_visible: bool,
}

impl Affordances {
    pub fn any(&self) -> bool {
        self.start_recording || self.start_game_timer || self.mark
    }
}

impl GameState {
    /// Start the countdown. Only the first call for a timed game has an effect.
    pub fn start_game_timer(&mut self, now: i64) -> bool {
        if self.game_timer_started || self.game_length_minutes == 0 {
            return false;
        }
        self.game_timer_started = true;
        self.game_start_time = Some(now);
        tracing::info!(
            length_minutes = self.game_length_minutes,
            "Game timer started"
        );
        true
    }

    /// Start the recording clock. Requires recording to be enabled; only the
    /// first call has an effect.
    pub fn start_recording(&mut self, now: i64) -> bool {
        if self.recording_started || !self.recording_enabled {
            return false;
        }
        self.recording_started = true;
        self.recording_start_time = Some(now);
        tracing::info!("Recording started");
        true
    }

    /// Milliseconds left before another mark is accepted, if any.
    pub fn mark_cooldown_remaining(&self, now: i64) -> Option<i64> {
        let last = self.last_timestamp_time?;
        let since = now - last;
        (since < MARK_COOLDOWN_MS).then(|| MARK_COOLDOWN_MS - since)
    }

    /// Stamp the current moment with the game context.
    pub fn mark_timestamp(&mut self, now: i64) -> MarkOutcome {
        let Some(elapsed_ms) = self.recording_elapsed_ms(now) else {
            return MarkOutcome::NotRecording;
        };

        if let Some(remaining_ms) = self.mark_cooldown_remaining(now) {
            tracing::debug!(remaining_ms, "Mark rejected during cooldown");
            return MarkOutcome::CoolingDown { remaining_ms };
        }

        let mark = TimestampMark {
            elapsed_formatted: format_elapsed(elapsed_ms),
            elapsed_ms,
            wall_clock_formatted: format_wall_clock(now),
            inning: self.inning,
            half: self.half,
        };
        self.timestamps.push(mark.clone());
        self.last_timestamp_time = Some(now);

        tracing::info!(
            elapsed = %mark.elapsed_formatted,
            context = %mark.context(),
            "Timestamp marked"
        );
        MarkOutcome::Marked(mark)
    }

    /// Time on the recording clock, or `None` before recording starts.
    pub fn recording_elapsed_ms(&self, now: i64) -> Option<i64> {
        let start = self
            .recording_start_time
            .filter(|_| self.recording_started)?;
        Some((now - start).max(0))
    }

    /// Countdown remaining, or `None` when no countdown is running.
    pub fn remaining_game_ms(&self, now: i64) -> Option<i64> {
        if !self.game_timer_started || self.game_length_minutes == 0 {
            return None;
        }
        let start = self.game_start_time?;
        let end = start + i64::from(self.game_length_minutes) * 60_000;
        Some((end - now).max(0))
    }

    /// Countdown text, or the placeholder when there is none.
    pub fn time_left_display(&self, now: i64) -> String {
        self.remaining_game_ms(now)
            .map(format_remaining)
            .unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string())
    }

    pub fn affordances(&self, now: i64) -> Affordances {
        let has_game_timer = self.game_length_minutes > 0;
        let cooling_down = self.mark_cooldown_remaining(now).is_some();
        let controls_visible = (self.recording_enabled || has_game_timer) && self.configured;

        Affordances {
            start_recording: self.recording_enabled && !self.recording_started,
            start_game_timer: has_game_timer && !self.game_timer_started,
            mark: self.recording_enabled && self.recording_started && !cooling_down,
            controls_visible,
            marks_visible: controls_visible
                && self.recording_started
                && !self.timestamps.is_empty(),
        }
    }
}
