//! Game record persistence
//!
//! The whole [`GameState`] is written as one JSON blob under a fixed key after
//! every mutation. Saved games from older versions live under legacy keys and
//! are copied forward unchanged the first time the current key is missing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::app_state::AppStateStore;
use super::database::DatabaseError;
use crate::game::{GameSettings, GameState};

/// Key holding the current game record
pub const GAME_STATE_KEY: &str = "dugout.game.v3";

/// Older keys checked once at startup, newest first
pub const LEGACY_GAME_STATE_KEYS: [&str; 2] = ["dugout.game.v2", "dugout.game.v1"];

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Failed to serialize game state: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Storage backend holding string values by key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl KeyValueStore for AppStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(AppStateStore::get(self, key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(AppStateStore::set(self, key, value)?)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the game record through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct GameStore<S> {
    store: S,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Copy a legacy record to the current key if the current key is empty.
    ///
    /// The value is copied verbatim. Returns the legacy key that was used.
    pub fn migrate_legacy(&self) -> Option<&'static str> {
        match self.store.get(GAME_STATE_KEY) {
            Ok(Some(_)) => return None,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read game state during migration");
                return None;
            }
        }

        for legacy_key in LEGACY_GAME_STATE_KEYS {
            let value = match self.store.get(legacy_key) {
                Ok(Some(value)) => value,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        key = legacy_key,
                        error = %e,
                        "Failed to read legacy game state"
                    );
                    continue;
                }
            };

            match self.store.set(GAME_STATE_KEY, &value) {
                Ok(()) => {
                    tracing::info!(from = legacy_key, to = GAME_STATE_KEY, "Migrated saved game");
                    return Some(legacy_key);
                }
                Err(e) => {
                    tracing::warn!(key = legacy_key, error = %e, "Failed to migrate saved game");
                    return None;
                }
            }
        }

        None
    }

    /// Load the saved record. Missing, unreadable or malformed records yield `None`.
    pub fn load(&self) -> Option<GameState> {
        self.load_key(GAME_STATE_KEY)
    }

    /// Like [`load`](Self::load) followed by the legacy keys, without writing
    /// anything back.
    pub fn peek(&self) -> Option<GameState> {
        match self.store.get(GAME_STATE_KEY) {
            Ok(Some(_)) => self.load(),
            _ => LEGACY_GAME_STATE_KEYS
                .iter()
                .find_map(|key| self.load_key(key)),
        }
    }

    fn load_key(&self, key: &str) -> Option<GameState> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read saved game");
                return None;
            }
        };

        let mut state: GameState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed saved game");
                return None;
            }
        };

        if !state.normalize() {
            tracing::warn!("Discarding structurally invalid saved game");
            return None;
        }
        Some(state)
    }

    /// Run the legacy migration, then load, falling back to a fresh game.
    pub fn load_or_new(&self, defaults: GameSettings) -> GameState {
        self.migrate_legacy();
        self.load().unwrap_or_else(|| GameState::fresh(defaults))
    }

    /// Overwrite the saved record with `state`.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.store.set(GAME_STATE_KEY, &json)
    }

    /// Save, logging instead of failing. Losing one save leaves memory intact.
    pub fn save_best_effort(&self, state: &GameState) {
        if let Err(e) = self.save(state) {
            tracing::warn!(error = %e, "Failed to save game state");
        }
    }
}
