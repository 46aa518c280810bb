use serde::Deserialize;
use tracing::warn;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/actmon/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// Refresh interval in milliseconds
    pub refresh_interval_ms: u64,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// PRNG seed for a reproducible simulation (None = random)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_MS,
            theme: "default".to_string(),
            seed: None,
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    refresh_interval_ms: Option<u64>,
    theme: Option<String>,
    seed: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/actmon/config.toml, falling back to
    /// defaults for any missing fields. If the file doesn't exist, returns
    /// pure defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file — use defaults
        };
        Self::from_toml_str(&content)
    }

    /// Parse and merge a TOML config body over the defaults.
    pub fn from_toml_str(content: &str) -> Self {
        let mut config = Config::default();

        let file_config: FileConfig = match toml::from_str(content) {
            Ok(fc) => fc,
            Err(e) => {
                warn!("failed to parse config: {}. Using defaults.", e);
                return config;
            }
        };

        // Merge file values over defaults
        if let Some(v) = file_config.refresh_interval_ms {
            config.refresh_interval_ms = v.max(MIN_REFRESH_MS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.seed {
            config.seed = Some(v);
        }

        config
    }
}
