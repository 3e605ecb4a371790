use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::game::GameSettings;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

const MIN_TICK_MS: u64 = 100;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Run cap, length and recording flag used when a new game starts
    pub game_defaults: GameSettings,
    /// Countdown refresh interval
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_defaults: GameSettings::default(),
            tick_interval: Duration::from_millis(1000),
        }
    }
}

/// TOML representation of the `[game]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlGameConfig {
    pub run_cap: Option<u32>,
    pub length_minutes: Option<u32>,
    pub recording_enabled: Option<bool>,
}

/// TOML representation of the `[ui]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlUiConfig {
    pub tick_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub game: Option<TomlGameConfig>,
    pub ui: Option<TomlUiConfig>,
}

impl Config {
    /// Load configuration from file, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match fs::read_to_string(&config_file) {
            Ok(contents) => Self::from_toml_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Ignoring unparsable config file"
                );
                Config::default()
            }),
            Err(e) => {
                tracing::debug!(
                    path = %config_file.display(),
                    error = %e,
                    "No readable config file, using defaults"
                );
                Config::default()
            }
        }
    }

    /// Parse a config file body and merge it over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(game) = toml_config.game {
            if let Some(run_cap) = game.run_cap {
                config.game_defaults.run_cap = run_cap;
            }
            if let Some(length) = game.length_minutes {
                config.game_defaults.game_length_minutes = length;
            }
            if let Some(recording) = game.recording_enabled {
                config.game_defaults.recording_enabled = recording;
            }
        }

        if let Some(ui) = toml_config.ui {
            if let Some(tick_ms) = ui.tick_ms {
                config.tick_interval = Duration::from_millis(tick_ms.max(MIN_TICK_MS));
            }
        }

        Ok(config)
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::debug!(error = %e, "Failed to create config directory");
                return;
            }
        }
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::debug!(error = %e, "Failed to write example config");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let config = Config::from_toml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_merges_over_defaults() {
        let config = Config::from_toml_str(
            r#"
            [game]
            run_cap = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.game_defaults.run_cap, 0);
        assert_eq!(config.game_defaults.game_length_minutes, 60);
        assert!(config.game_defaults.recording_enabled);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_tick_interval_has_floor() {
        let config = Config::from_toml_str("[ui]\ntick_ms = 5\n").unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(MIN_TICK_MS));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Config::from_toml_str("[game]\nrun_cap = \"six\"\n").is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }
}
