// crates/core/src/config.rs
//! Fetch configuration.

use crate::error::ConfigError;
use crate::types::DEFAULT_JOBS_PATH;

/// Where the jobs listing lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Backend origin that relative fetch URLs are resolved against.
    pub base_url: String,
    /// URL fetched on first activation.
    pub initial_path: String,
    /// Per-request timeout. `None` means a hung request never settles.
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            initial_path: DEFAULT_JOBS_PATH.into(),
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with `JOBS_API_BASE_URL`, `JOBS_INITIAL_PATH` and
    /// `JOBS_FETCH_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("JOBS_API_BASE_URL").filter(|s| !s.is_empty()) {
            config.base_url = url;
        }
        if let Some(path) = lookup("JOBS_INITIAL_PATH").filter(|s| !s.is_empty()) {
            config.initial_path = path;
        }
        if let Some(raw) = lookup("JOBS_FETCH_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "JOBS_FETCH_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.timeout_secs = Some(secs);
        }
        Ok(config)
    }
}
