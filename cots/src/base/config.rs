use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str =
    "https://pqg138n96h.execute-api.ap-southeast-2.amazonaws.com/dev/v1/players";

const API_URL_KEY: &str = "api_url";
const TIMEOUT_KEY: &str = "timeout";

#[cfg(not(target_arch = "wasm32"))]
const ENV_PREFIX: &str = "COTS_";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidUrl(String, String),
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl(url, reason) => {
                write!(f, "Invalid API URL '{}': {}", url, reason)
            }
            ConfigError::InvalidTimeout(value) => {
                write!(f, "Invalid timeout '{}': expected seconds", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Default)]
pub struct EnvironmentConfig {
    pub settings: HashMap<String, String>,
}

impl EnvironmentConfig {
    // shortcut method to create a Config with a single key-value pair
    pub fn with_setting(key: &str, value: &str) -> EnvironmentConfig {
        let mut settings = HashMap::new();
        settings.insert(key.to_string(), value.to_string());
        EnvironmentConfig { settings }
    }

    /// Settings taken from `COTS_*` environment variables, e.g.
    /// `COTS_API_URL` becomes `api_url`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> EnvironmentConfig {
        let settings = std::env::vars()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_lowercase(), value))
            })
            .collect();
        EnvironmentConfig { settings }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }

    /// Endpoint that receives the registration POST. Falls back to
    /// [`DEFAULT_API_URL`] when no `api_url` setting is present.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .get(API_URL_KEY)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let url = Url::parse(raw).map_err(|e| {
            ConfigError::InvalidUrl(raw.to_string(), e.to_string())
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigError::InvalidUrl(
                raw.to_string(),
                format!("unsupported scheme '{}'", scheme),
            )),
        }
    }

    /// Request timeout in whole seconds. `None` means wait until the
    /// request settles.
    pub fn timeout(&self) -> Result<Option<Duration>, ConfigError> {
        match self.get(TIMEOUT_KEY) {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(|secs| Some(Duration::from_secs(secs)))
                .ok_or_else(|| ConfigError::InvalidTimeout(value.clone())),
        }
    }
}
