//! Data persistence layer
//!
//! SQLite-backed key-value storage and the game record stored in it.

mod app_state;
mod database;
mod game_store;
mod migrations;

pub use app_state::AppStateStore;
pub use database::{Database, DatabaseError};
pub use game_store::{
    GameStore, KeyValueStore, MemoryStore, StoreError, GAME_STATE_KEY, LEGACY_GAME_STATE_KEYS,
};
