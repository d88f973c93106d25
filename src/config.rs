// Configuration
// Runtime settings read from the environment (and `.env`)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_KEY: &str = "NASA_API_KEY";
const ENV_BASE_URL: &str = "NEOWS_BASE_URL";
const ENV_TIMEOUT: &str = "NEOWS_TIMEOUT_SECS";

/// NeoWs client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from process environment, after merging a `.env` file if present
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs = match get(ENV_TIMEOUT) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT, raw))
            })?,
            None => defaults.timeout_secs,
        };
        if timeout_secs == 0 {
            return Err(AppError::config(format!("{} must be greater than zero", ENV_TIMEOUT)));
        }

        Ok(Self {
            api_key: get(ENV_API_KEY).unwrap_or(defaults.api_key),
            base_url: get(ENV_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs,
        })
    }

    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = key;
        }
        if let Some(url) = base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
