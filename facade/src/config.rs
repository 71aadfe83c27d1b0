//! Startup configuration read from the environment.

use std::num::ParseIntError;
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8081";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/v1/organisation/accounts";
pub const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BACKEND_TIMEOUT_MS must be a whole number of milliseconds, got {value:?}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    pub listen_addr: String,
    pub backend_url: String,
    pub backend_timeout: Duration,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout: Duration::from_millis(DEFAULT_BACKEND_TIMEOUT_MS),
        }
    }
}

impl FacadeConfig {
    /// Read `LISTEN_ADDR`, `BACKEND_URL` and `BACKEND_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let backend_timeout = match lookup("BACKEND_TIMEOUT_MS") {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidTimeout { value, source })?;
                Duration::from_millis(millis)
            }
            None => defaults.backend_timeout,
        };
        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            backend_timeout,
        })
    }
}
