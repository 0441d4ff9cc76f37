//! Client configuration resolved at build time.
//!
//! The browser has no process environment, so overrides are captured with
//! `option_env!` when the WASM bundle is compiled and parsed here with the
//! same default-on-absence rules the rest of the client relies on.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "jwtToken";
pub const DEFAULT_SESSION_CHECK_SECS: u64 = 60;
pub const DEFAULT_BROWSE_PAGE_SIZE: u32 = 12;
pub const DEFAULT_DASHBOARD_PAGE_SIZE: u32 = 100;
pub const DEFAULT_NOTICE_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`: expected http:// or https://")]
    InvalidBaseUrl(String),
    #[error("invalid session check interval `{0}`: expected a positive number of seconds")]
    InvalidInterval(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the raw credential.
    pub token_storage_key: &'static str,
    /// Period of the background session liveness check.
    pub session_check_interval: Duration,
    pub browse_page_size: u32,
    pub dashboard_page_size: u32,
    pub notice_lifetime_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY,
            session_check_interval: Duration::from_secs(DEFAULT_SESSION_CHECK_SECS),
            browse_page_size: DEFAULT_BROWSE_PAGE_SIZE,
            dashboard_page_size: DEFAULT_DASHBOARD_PAGE_SIZE,
            notice_lifetime_ms: DEFAULT_NOTICE_LIFETIME_MS,
        }
    }
}

impl ClientConfig {
    /// Build the config from values baked in at compile time.
    ///
    /// Optional:
    /// - `BOOKSWAP_API_URL`: REST API root, default `http://localhost:8080/api`
    /// - `BOOKSWAP_SESSION_CHECK_SECS`: liveness interval, default 60
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("BOOKSWAP_API_URL"), option_env!("BOOKSWAP_SESSION_CHECK_SECS")) {
            Ok(cfg) => cfg,
            Err(e) => {
                leptos::logging::warn!("config: {e}; falling back to defaults");
                Self::default()
            }
        }
    }

    /// Build the config from raw override strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is present but unusable.
    pub fn from_values(api_url: Option<&str>, check_secs: Option<&str>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(raw) = api_url.map(str::trim).filter(|v| !v.is_empty()) {
            cfg.api_base_url = parse_base_url(raw)?;
        }
        if let Some(raw) = check_secs.map(str::trim).filter(|v| !v.is_empty()) {
            cfg.session_check_interval = parse_interval(raw)?;
        }
        Ok(cfg)
    }

    /// Absolute URL for an API path such as `/books`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidInterval(raw.to_owned())),
    }
}
