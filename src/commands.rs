//! Non-interactive subcommands working directly on the saved game.

use anyhow::{Context, Result};

use dugout::data::{AppStateStore, Database, GameStore};
use dugout::report::{marks_text, scoreboard_text};
use dugout::ui::view::{MarkRow, ScoreboardView};
use dugout::{Clock, Config, GameState, SystemClock};

fn open_store() -> Result<GameStore<AppStateStore>> {
    let db = Database::open_default().context("Failed to open the game database")?;
    Ok(GameStore::new(AppStateStore::new(db)))
}

/// Read-only: a legacy record is shown but not copied forward.
fn load(config: &Config) -> Result<GameState> {
    let state = open_store()?.peek();
    Ok(state.unwrap_or_else(|| GameState::fresh(config.game_defaults)))
}

pub fn run_show(config: &Config) -> Result<()> {
    let state = load(config)?;
    let view = ScoreboardView::new(&state, SystemClock.now_ms());
    print!("{}", scoreboard_text(&view));
    Ok(())
}

pub fn run_reset(config: &Config) -> Result<()> {
    let store = open_store()?;
    store
        .save(&GameState::fresh(config.game_defaults))
        .context("Failed to save the new game")?;
    tracing::info!("Saved game reset from the command line");
    println!("Started a new game.");
    Ok(())
}

pub fn run_marks(config: &Config, json: bool) -> Result<()> {
    let state = load(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state.timestamps)?);
        return Ok(());
    }
    if state.timestamps.is_empty() {
        println!("No timestamps recorded.");
        return Ok(());
    }
    let rows: Vec<MarkRow> = state.timestamps.iter().map(MarkRow::from).collect();
    print!("{}", marks_text(&rows));
    Ok(())
}
