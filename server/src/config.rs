//! Server configuration parsed from environment variables.

use std::time::Duration;

use blog_client::net::api::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use blog_client::net::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT_SECS;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = DEFAULT_CONNECT_TIMEOUT_SECS;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ApiTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
    pub timeouts: ApiTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BLOG_API_BASE_URL`: default `http://localhost:5000`
    /// - `BLOG_API_TIMEOUT_SECS`: default 10
    /// - `BLOG_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT, "port number")?;
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeouts = ApiTimeouts {
            request_secs: parse_or(
                "BLOG_API_TIMEOUT_SECS",
                lookup("BLOG_API_TIMEOUT_SECS"),
                DEFAULT_API_TIMEOUT_SECS,
                "number of seconds",
            )?,
            connect_secs: parse_or(
                "BLOG_API_CONNECT_TIMEOUT_SECS",
                lookup("BLOG_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
                "number of seconds",
            )?,
        };

        Ok(Self { port, api: ApiConfig::new(base_url), timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned(), expected }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
