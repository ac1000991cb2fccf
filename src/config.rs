//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling
//! [`ServerConfig::from_env`], so both sources feed the same lookups.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";
pub const DEFAULT_TMDB_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TMDB_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream catalog key is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmdbTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl TmdbTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Upstream catalog settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    /// `None` leaves the movie endpoints disabled.
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub timeouts: TmdbTimeouts,
}

impl TmdbConfig {
    /// The API key, or the error explaining why upstream calls are off.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when `TMDB_API_KEY` was unset or blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey { var: "TMDB_API_KEY" })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub tmdb: TmdbConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TMDB_API_KEY`: movie endpoints answer 503 when absent
    /// - `TMDB_BASE_URL`: default `https://api.themoviedb.org/3`
    /// - `TMDB_LANGUAGE`: default `en-US`
    /// - `TMDB_REQUEST_TIMEOUT_SECS`: default 10
    /// - `TMDB_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        let api_key = std::env::var("TMDB_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TMDB_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let language = std::env::var("TMDB_LANGUAGE").unwrap_or_else(|_| DEFAULT_TMDB_LANGUAGE.to_string());
        let timeouts = TmdbTimeouts {
            request_secs: env_parse_u64("TMDB_REQUEST_TIMEOUT_SECS", DEFAULT_TMDB_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TMDB_CONNECT_TIMEOUT_SECS", DEFAULT_TMDB_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, tmdb: TmdbConfig { api_key, base_url, language, timeouts } })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_string() }),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
