//! Rendered screens at key moments of a game

use crossterm::event::{Event, KeyCode};
use dugout::ui::AppEvent;

use super::common::terminal::{assert_screen_contains, assert_screen_lacks, render_app};
use super::common::{booted_app, press, type_keys};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

#[tokio::test]
async fn first_launch_shows_settings_over_scoreboard() {
    let t = booted_app();
    let screen = render_app(&t.app, WIDTH, HEIGHT);

    assert_screen_contains(&screen, "Game Settings");
    assert_screen_contains(&screen, "Run cap");
    assert_screen_contains(&screen, "Game length");
    assert_screen_contains(&screen, "Top of 1st");
    // Unconfigured games hide the clock controls.
    assert_screen_lacks(&screen, "Start recording");
}

#[tokio::test]
async fn configured_game_shows_controls_and_grid() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    type_keys(&mut t.app, "rro");

    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Top of 1st");
    assert_screen_contains(&screen, "Visitor 2");
    assert_screen_contains(&screen, "Home 0");
    assert_screen_contains(&screen, "Outs ● ○ ○");
    assert_screen_contains(&screen, "Run cap 6");
    assert_screen_contains(&screen, "Time left —");
    assert_screen_contains(&screen, "Start game timer");
    assert_screen_contains(&screen, "Start recording");
    assert_screen_contains(&screen, " r  run");
}

#[tokio::test]
async fn recording_shows_marks() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    type_keys(&mut t.app, "gc");
    t.clock.advance(5_000);
    type_keys(&mut t.app, "ooot");

    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Bottom of 1st");
    assert_screen_contains(&screen, "Timestamps (1)");
    assert_screen_contains(&screen, "0:00:05");
    assert_screen_contains(&screen, "Bottom 1");
    assert_screen_contains(&screen, "Time left 59:55");
    // Everything started and the mark is cooling down.
    assert_screen_lacks(&screen, "Start recording");
    assert_screen_lacks(&screen, "Mark");

    t.clock.advance(10_000);
    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "● REC 0:00:15");
    assert_screen_contains(&screen, "t  Mark");
}

#[tokio::test]
async fn dialogs_render_over_the_board() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);

    type_keys(&mut t.app, "m");
    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Menu");
    assert_screen_contains(&screen, "Undo last play");
    assert_screen_contains(&screen, "New game");
    press(&mut t.app, KeyCode::Esc);

    type_keys(&mut t.app, "n");
    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Start a new game?");
    assert_screen_contains(&screen, "Cancel");
}

#[tokio::test]
async fn long_games_keep_current_inning_visible() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    for _ in 0..14 {
        type_keys(&mut t.app, "oooooo");
    }
    type_keys(&mut t.app, "r");

    let screen = render_app(&t.app, WIDTH, 20);
    assert_screen_contains(&screen, "Top of 15th");
    assert_screen_contains(&screen, " 15 ");
}

#[tokio::test]
async fn focus_regained_shows_time_spent_away() {
    let mut t = booted_app();
    press(&mut t.app, KeyCode::Enter);
    type_keys(&mut t.app, "g");
    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Time left 60:00");

    // Terminal backgrounded for 20 minutes and 30 seconds.
    t.clock.advance(1_230_000);
    t.app.handle_app_event(AppEvent::Input(Event::FocusGained));

    let screen = render_app(&t.app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "Time left 39:30");
    assert!(!t.app.should_quit());
}
