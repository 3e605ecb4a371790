//! Where dugout keeps its files
//!
//! Everything lives under one data directory, `~/.dugout` unless overridden
//! with `--data-dir`:
//!
//! ```text
//! ~/.dugout/
//!   config.toml
//!   dugout.db
//!   logs/dugout.log
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

const DIR_NAME: &str = ".dugout";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Pin the data directory for the rest of the process.
///
/// Call before anything resolves a path. Only the first call wins.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(home_data_dir);
    if let Err(rejected) = DATA_DIR.set(path) {
        tracing::debug!(
            rejected = %rejected.display(),
            current = %data_dir().display(),
            "Data directory already set"
        );
    }
}

fn home_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DIR_NAME),
        None => PathBuf::from(DIR_NAME),
    }
}

pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(home_data_dir)
}

pub fn database_path() -> PathBuf {
    data_dir().join("dugout.db")
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join("dugout.log")
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
