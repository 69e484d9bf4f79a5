use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Difficulty, FocusArea, Position};

pub const KNOWN_KEYS: [&str; 5] = ["tick_ms", "catalog", "position", "focus", "difficulty"];

pub const DEFAULT_TICK_MS: u64 = 1000;

/// Raw key/value config, stored as a flat TOML table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub map: BTreeMap<String, String>,
}

/// `<config dir>/swish/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|d| d.join("swish").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io)?;
        }
        fs::write(path, toml::to_string(self)?).map_err(io)
    }

    pub fn is_known(key: &str) -> bool {
        KNOWN_KEYS.contains(&key)
    }
}

/// Typed view over [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick: Duration,
    pub catalog: Option<PathBuf>,
    pub position: Position,
    pub focus: FocusArea,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            catalog: None,
            position: Position::Guard,
            focus: FocusArea::Shooting,
            difficulty: Difficulty::Intermediate,
        }
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

impl TryFrom<&Config> for Settings {
    type Error = ConfigError;

    fn try_from(cfg: &Config) -> Result<Self, Self::Error> {
        let mut s = Settings::default();

        for (key, value) in &cfg.map {
            match key.as_str() {
                "tick_ms" => {
                    let ms: u64 = value
                        .parse()
                        .ok()
                        .filter(|ms| *ms > 0)
                        .ok_or_else(|| invalid(key, value, "a positive number of milliseconds"))?;
                    s.tick = Duration::from_millis(ms);
                }
                "catalog" => s.catalog = Some(PathBuf::from(value)),
                "position" => {
                    s.position = value
                        .parse()
                        .map_err(|_| invalid(key, value, "guard, forward, center or wing"))?
                }
                "focus" => {
                    s.focus = value.parse().map_err(|_| {
                        invalid(key, value, "shooting, ball-handling, defense or all-around")
                    })?
                }
                "difficulty" => {
                    s.difficulty = value
                        .parse()
                        .map_err(|_| invalid(key, value, "beginner, intermediate or advanced"))?
                }
                other => warn!("ignoring unknown config key `{other}`"),
            }
        }

        Ok(s)
    }
}
