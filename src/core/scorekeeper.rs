//! The single owner of the game record.

use std::sync::Arc;
use std::time::Duration;

use super::command::{Command, Effect};
use crate::config::Config;
use crate::data::{AppStateStore, Database, GameStore, KeyValueStore, MemoryStore};
use crate::game::{self, GameState};
use crate::recording::{MarkOutcome, MARK_COOLDOWN_MS};
use crate::util::Clock;

type Backend = Box<dyn KeyValueStore + Send>;

/// Controller holding the game record, its store and the clock.
pub struct Scorekeeper {
    config: Config,
    clock: Arc<dyn Clock>,
    store: GameStore<Backend>,
    state: GameState,
}

impl Scorekeeper {
    /// Open the default database, falling back to memory if it is unavailable.
    pub fn open(config: Config, clock: Arc<dyn Clock>) -> Self {
        let backend: Backend = match Database::open_default() {
            Ok(db) => Box::new(AppStateStore::new(db)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open database, game will not be saved");
                Box::new(MemoryStore::new())
            }
        };
        Self::with_store(config, clock, backend)
    }

    /// Load (or create) the game record from `backend`.
    pub fn with_store(config: Config, clock: Arc<dyn Clock>, backend: Backend) -> Self {
        let store = GameStore::new(backend);
        let state = store.load_or_new(config.game_defaults);
        Self {
            config,
            clock,
            store,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Effects to run at startup, after any leftovers were cancelled.
    pub fn boot(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::CancelCooldownRedraw];
        if !self.state.configured {
            effects.push(Effect::OpenSettings);
        }
        if let Some(remaining) = self.state.mark_cooldown_remaining(self.now_ms()) {
            effects.push(Effect::ScheduleCooldownRedraw(Duration::from_millis(
                remaining.max(0) as u64,
            )));
        }
        effects
    }

    /// Apply one command, persist, and report the follow-up effects.
    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        let now = self.now_ms();
        let mut effects = Vec::new();

        let changed = match command {
            Command::Play(play) => game::step(&mut self.state, play).changed(),
            Command::NewGame => {
                effects.push(Effect::CancelCooldownRedraw);
                self.state.new_game(self.config.game_defaults);
                effects.push(Effect::OpenSettings);
                true
            }
            Command::Configure(settings) => {
                self.state.configure(settings);
                true
            }
            Command::StartGameTimer => self.state.start_game_timer(now),
            Command::StartRecording => self.state.start_recording(now),
            Command::MarkTimestamp => match self.state.mark_timestamp(now) {
                MarkOutcome::Marked(_) => {
                    effects.push(Effect::ScheduleCooldownRedraw(Duration::from_millis(
                        MARK_COOLDOWN_MS as u64,
                    )));
                    true
                }
                MarkOutcome::NotRecording | MarkOutcome::CoolingDown { .. } => false,
            },
        };

        if changed {
            self.store.save_best_effort(&self.state);
        } else {
            tracing::debug!(?command, "Command had no effect");
        }
        effects
    }
}
