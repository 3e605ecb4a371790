//! Scoring, menu and recording flows driven through key presses

use crossterm::event::KeyCode;
use dugout::data::GAME_STATE_KEY;
use dugout::ui::InputMode;
use dugout::{Clock, GameState, Half, KeyValueStore};

use super::common::{booted_app, press, type_keys, T0};

fn saved(store: &impl KeyValueStore) -> GameState {
    let raw = store.get(GAME_STATE_KEY).unwrap().expect("game was saved");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn first_launch_asks_for_settings() {
    let mut t = booted_app();
    assert_eq!(t.app.input_mode(), InputMode::Settings);
    assert!(!t.app.state().configured);

    press(&mut t.app, KeyCode::Enter);
    assert_eq!(t.app.input_mode(), InputMode::Scoreboard);
    assert!(t.app.state().configured);
    assert_eq!(t.app.state().run_cap, 6);
    assert!(saved(&t.store).configured);
}

#[tokio::test]
async fn run_cap_switches_and_undo_takes_two_steps() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);

    type_keys(&mut t.app, "rrrrr");
    assert_eq!(t.app.state().half, Half::Top);
    type_keys(&mut t.app, "r");
    assert_eq!(t.app.state().half, Half::Bottom);
    assert_eq!(t.app.state().totals.visitor, 6);

    type_keys(&mut t.app, "u");
    assert_eq!(t.app.state().half, Half::Top);
    assert_eq!(t.app.state().totals.visitor, 6);

    type_keys(&mut t.app, "u");
    assert_eq!(t.app.state().totals.visitor, 5);
    assert_eq!(saved(&t.store), *t.app.state());
}

#[tokio::test]
async fn full_inning_advances() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);

    type_keys(&mut t.app, "roooroor");
    let state = t.app.state();
    // Three outs in the top, then the home side scores twice with two outs.
    assert_eq!(state.inning, 1);
    assert_eq!(state.half, Half::Bottom);
    assert_eq!(state.outs, 2);
    assert_eq!(state.innings.visitor, vec![1]);
    assert_eq!(state.innings.home, vec![2]);

    type_keys(&mut t.app, "o");
    assert_eq!(t.app.state().inning, 2);
    assert_eq!(t.app.state().half, Half::Top);
    assert_eq!(t.app.state().innings.home.len(), 2);
}

#[tokio::test]
async fn settings_form_applies_typed_values() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Backspace);
    type_keys(&mut t.app, "3");
    press(&mut t.app, KeyCode::Tab);
    press(&mut t.app, KeyCode::Backspace);
    press(&mut t.app, KeyCode::Backspace);
    press(&mut t.app, KeyCode::Tab);
    type_keys(&mut t.app, " ");
    press(&mut t.app, KeyCode::Enter);

    let state = t.app.state();
    assert_eq!(state.run_cap, 3);
    assert_eq!(state.game_length_minutes, 0);
    assert!(!state.recording_enabled);
    assert_eq!(state.time_left_display(T0), "—");
}

#[tokio::test]
async fn cancelled_first_settings_leave_game_unconfigured() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Esc);
    assert_eq!(t.app.input_mode(), InputMode::Scoreboard);
    assert!(!t.app.state().configured);

    type_keys(&mut t.app, "s");
    assert_eq!(t.app.input_mode(), InputMode::Settings);
}

#[tokio::test]
async fn menu_undo_and_close() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    type_keys(&mut t.app, "ro");

    type_keys(&mut t.app, "m");
    assert_eq!(t.app.input_mode(), InputMode::Menu);
    press(&mut t.app, KeyCode::Down);
    press(&mut t.app, KeyCode::Enter);
    assert_eq!(t.app.input_mode(), InputMode::Scoreboard);
    assert_eq!(t.app.state().outs, 0);
    assert_eq!(t.app.state().totals.visitor, 1);

    type_keys(&mut t.app, "m");
    press(&mut t.app, KeyCode::Esc);
    assert_eq!(t.app.input_mode(), InputMode::Scoreboard);
}

#[tokio::test]
async fn undo_availability_follows_history() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    assert!(!t.app.view().can_undo);

    type_keys(&mut t.app, "r");
    assert!(t.app.view().can_undo);

    type_keys(&mut t.app, "u");
    assert!(!t.app.view().can_undo);
}

#[tokio::test]
async fn new_game_needs_confirmation() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    type_keys(&mut t.app, "rr");

    type_keys(&mut t.app, "n");
    assert_eq!(t.app.input_mode(), InputMode::Confirming);
    type_keys(&mut t.app, "n");
    assert_eq!(t.app.input_mode(), InputMode::Scoreboard);
    assert_eq!(t.app.state().totals.visitor, 2);

    type_keys(&mut t.app, "n");
    // Enter with the default selection cancels.
    press(&mut t.app, KeyCode::Enter);
    assert_eq!(t.app.state().totals.visitor, 2);

    type_keys(&mut t.app, "ny");
    assert_eq!(t.app.input_mode(), InputMode::Settings);
    assert!(!t.app.state().configured);
    assert_eq!(t.app.state().totals.visitor, 0);
    assert!(t.app.state().history.is_empty());
    assert_eq!(saved(&t.store), *t.app.state());
}

#[tokio::test]
async fn timers_and_marks() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);

    type_keys(&mut t.app, "t");
    assert!(t.app.state().timestamps.is_empty());

    type_keys(&mut t.app, "gc");
    assert_eq!(t.app.state().game_start_time, Some(T0));
    assert_eq!(t.app.state().recording_start_time, Some(T0));

    t.clock.advance(65_000);
    type_keys(&mut t.app, "t");
    assert_eq!(t.app.state().timestamps.len(), 1);
    assert_eq!(t.app.state().timestamps[0].elapsed_formatted, "0:01:05");

    t.clock.advance(9_999);
    type_keys(&mut t.app, "t");
    assert_eq!(t.app.state().timestamps.len(), 1);

    t.clock.advance(1);
    type_keys(&mut t.app, "ooot");
    assert_eq!(t.app.state().timestamps.len(), 2);
    assert_eq!(t.app.state().timestamps[1].context(), "Bottom 1");
    assert_eq!(t.app.state().time_left_display(t.clock.now_ms()), "58:45");
}

#[tokio::test]
async fn ctrl_c_quits() {
    let mut t = booted_app();
    t.app.handle_key_event(crossterm::event::KeyEvent::new(
        KeyCode::Char('c'),
        crossterm::event::KeyModifiers::CONTROL,
    ));
    assert!(t.app.should_quit());
}
