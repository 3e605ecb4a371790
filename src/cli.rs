//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dugout",
    version,
    about = "Scorekeeper and moment recorder for backyard baseball"
)]
pub struct Cli {
    /// Use this directory instead of ~/.dugout for the database, config and logs.
    #[arg(long = "data-dir", value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive scoreboard (default).
    Play,

    /// Print the saved scoreboard and exit.
    Show,

    /// Replace the saved game with a fresh one.
    Reset,

    /// Print the recorded timestamps.
    Marks {
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
