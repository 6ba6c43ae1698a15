//! API endpoint configuration read from the environment.

use std::time::Duration;

use log::info;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.nkot.co.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

// Every variable is optional; `from_raw` fills in defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    api_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `API_BASE_URL` and `API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, serde_env::Error> {
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let mut config = match raw.api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };
        if let Some(secs) = raw.api_timeout_secs.filter(|secs| *secs > 0) {
            config.timeout = Duration::from_secs(secs);
        }
        info!(
            "API base url {} (timeout {}s)",
            config.base_url,
            config.timeout.as_secs()
        );
        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins `path` (which starts with `/`) onto the base url.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
