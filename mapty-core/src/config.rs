use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Application settings. Every field has a default, so a partial (or empty)
/// config file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub form: FormConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the workout list is stored under.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "workouts".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Popup on the marker placed at the user's position.
    pub home_popup: String,
    pub popup_min_width: u32,
    pub popup_max_width: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            home_popup: "You are here".to_string(),
            popup_min_width: 100,
            popup_max_width: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long the form stays out of the layout after a submit, so the
    /// hide transition is not cut short by the list reflowing.
    pub hide_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `mapty_core=debug`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
