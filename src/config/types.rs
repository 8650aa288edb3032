use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the movie service lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "http://localhost:8000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Durable session storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token file location. Defaults to the platform data directory.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl SessionConfig {
    /// Token file path, falling back to `<data dir>/cinedeck/tokens.json`.
    pub fn resolved_token_path(&self) -> PathBuf {
        self.token_path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("cinedeck").join("tokens.json")
        })
    }
}
