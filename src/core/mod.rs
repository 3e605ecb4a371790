//! Core controller shared by the TUI and the command-line subcommands.
//!
//! Owns the game record, its persistence and the time source. Every command
//! mutates the record synchronously, persists it, and returns the effects the
//! presentation layer has to carry out.

mod command;
mod scorekeeper;

pub use command::{Command, Effect};
pub use scorekeeper::Scorekeeper;
