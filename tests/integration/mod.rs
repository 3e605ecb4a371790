//! Integration tests for Dugout
//!
//! These drive the app the way a scorekeeper would, through key presses,
//! and check the record, the store and the rendered screen.

#[path = "../common/mod.rs"]
pub mod common;

pub mod game_flow;
pub mod persistence_flow;
pub mod rendering;
