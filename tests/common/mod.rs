//! Shared test utilities
//!
//! - An app wired to an in-memory store and a manual clock
//! - Key press helpers
//! - TUI terminal testing helpers

pub mod terminal;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dugout::{App, Config, ManualClock, MemoryStore, Scorekeeper};

/// Fixed start instant for deterministic clocks
pub const T0: i64 = 1_700_000_000_000;

pub struct TestApp {
    pub app: App,
    pub store: MemoryStore,
    pub clock: ManualClock,
}

/// Booted app on a fresh in-memory store
pub fn booted_app() -> TestApp {
    booted_app_with(MemoryStore::new())
}

pub fn booted_app_with(store: MemoryStore) -> TestApp {
    let clock = ManualClock::new(T0);
    let keeper = Scorekeeper::with_store(
        Config::default(),
        Arc::new(clock.clone()),
        Box::new(store.clone()),
    );
    let mut app = App::new(keeper);
    app.boot();
    TestApp { app, store, clock }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Press each character in turn
pub fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code));
}
