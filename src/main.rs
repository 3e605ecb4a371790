use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dugout::ui::terminal_guard::install_panic_hook;
use dugout::{util, App, Config, Scorekeeper, SystemClock};

mod cli;
mod commands;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.dugout/logs/dugout.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config = Config::load();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            install_panic_hook();
            let keeper = Scorekeeper::open(config, Arc::new(SystemClock));
            let mut app = App::new(keeper);
            app.run().await
        }
        Command::Show => commands::run_show(&config),
        Command::Reset => commands::run_reset(&config),
        Command::Marks { json } => commands::run_marks(&config, json),
    }
}
