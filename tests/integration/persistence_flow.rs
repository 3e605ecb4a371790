//! Saving and reloading through the SQLite store

use std::sync::Arc;

use dugout::data::{AppStateStore, Database, GAME_STATE_KEY};
use dugout::game::Play;
use dugout::{Command, Config, GameSettings, Half, ManualClock, MemoryStore, Scorekeeper};
use tempfile::tempdir;

use super::common::{booted_app_with, T0};

fn open_keeper(path: &std::path::Path, clock: &ManualClock) -> Scorekeeper {
    let db = Database::open(path.to_path_buf()).unwrap();
    Scorekeeper::with_store(
        Config::default(),
        Arc::new(clock.clone()),
        Box::new(AppStateStore::new(db)),
    )
}

#[test]
fn game_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dugout.db");
    let clock = ManualClock::new(T0);

    let expected = {
        let mut keeper = open_keeper(&path, &clock);
        keeper.handle(Command::Configure(GameSettings::default()));
        keeper.handle(Command::StartRecording);
        for play in [Play::Run, Play::Out, Play::Out, Play::Out, Play::Run] {
            keeper.handle(Command::Play(play));
        }
        clock.advance(30_000);
        keeper.handle(Command::MarkTimestamp);
        keeper.state().clone()
    };

    let keeper = open_keeper(&path, &clock);
    assert_eq!(*keeper.state(), expected);
    assert_eq!(keeper.state().half, Half::Bottom);
    assert_eq!(keeper.state().timestamps.len(), 1);
    assert_eq!(keeper.state().history.len(), 6);
}

#[test]
fn undo_history_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dugout.db");
    let clock = ManualClock::new(T0);

    {
        let mut keeper = open_keeper(&path, &clock);
        keeper.handle(Command::Configure(GameSettings::default()));
        for _ in 0..3 {
            keeper.handle(Command::Play(Play::Out));
        }
    }

    let mut keeper = open_keeper(&path, &clock);
    keeper.handle(Command::Play(Play::Undo));
    assert_eq!(keeper.state().half, Half::Top);
    assert_eq!(keeper.state().outs, 3);
    keeper.handle(Command::Play(Play::Undo));
    assert_eq!(keeper.state().outs, 2);
}

#[test]
fn cooldown_resumes_after_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dugout.db");
    let clock = ManualClock::new(T0);

    {
        let mut keeper = open_keeper(&path, &clock);
        keeper.handle(Command::Configure(GameSettings::default()));
        keeper.handle(Command::StartRecording);
        keeper.handle(Command::MarkTimestamp);
    }

    clock.advance(4_000);
    let mut keeper = open_keeper(&path, &clock);
    assert!(keeper.boot().contains(&dugout::Effect::ScheduleCooldownRedraw(
        std::time::Duration::from_millis(6_000)
    )));
    keeper.handle(Command::MarkTimestamp);
    assert_eq!(keeper.state().timestamps.len(), 1);
}

#[test]
fn legacy_save_is_picked_up() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dugout.db");
    let legacy = r#"{
        "inning": 3,
        "half": "bottom",
        "outs": 1,
        "runCap": 4,
        "gameLengthMin": 45,
        "totals": {"visitor": 5, "home": 2},
        "innings": {"visitor": [2, 3, 0], "home": [1, 1]},
        "recordingEnabled": false
    }"#;
    {
        let store = AppStateStore::new(Database::open(path.clone()).unwrap());
        store.set("dugout.game.v2", legacy).unwrap();
    }

    let keeper = open_keeper(&path, &ManualClock::new(T0));
    let state = keeper.state();
    assert_eq!(state.inning, 3);
    assert_eq!(state.half, Half::Bottom);
    assert_eq!(state.run_cap, 4);
    assert_eq!(state.game_length_minutes, 45);
    assert_eq!(state.innings.home, vec![1, 1, 0]);
    assert!(!state.configured);
    assert_eq!(
        keeper.boot(),
        vec![
            dugout::Effect::CancelCooldownRedraw,
            dugout::Effect::OpenSettings
        ]
    );

    let store = AppStateStore::new(Database::open(path).unwrap());
    assert_eq!(store.get(GAME_STATE_KEY).unwrap().as_deref(), Some(legacy));
}

#[test]
fn corrupt_save_starts_fresh() {
    let store = MemoryStore::new();
    dugout::KeyValueStore::set(&store, GAME_STATE_KEY, "{\"inning\": -1").unwrap();

    let t = booted_app_with(store);
    assert_eq!(*t.app.state(), dugout::GameState::default());
}
