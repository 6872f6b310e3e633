//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) through `dotenvy` before calling
//! [`ServerConfig::from_env`], so either source works.

use std::time::Duration;

use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACTIVITIES_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ACTIVITIES_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ACTIVITIES_API_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// The activities backend URL is malformed or cannot carry a path.
    #[error("invalid ACTIVITIES_API_URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL the `/activities` routes are forwarded to.
    pub activities_api_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACTIVITIES_API_URL`: default `http://127.0.0.1:8000`
    /// - `ACTIVITIES_API_TIMEOUT_SECS`: default 10
    /// - `ACTIVITIES_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let raw_url = lookup("ACTIVITIES_API_URL").unwrap_or_else(|| DEFAULT_ACTIVITIES_API_URL.to_owned());
        let activities_api_url = parse_base_url(&raw_url)?;
        let request_secs =
            parse_number(&lookup, "ACTIVITIES_API_TIMEOUT_SECS", DEFAULT_ACTIVITIES_API_TIMEOUT_SECS)?;
        let connect_secs = parse_number(
            &lookup,
            "ACTIVITIES_API_CONNECT_TIMEOUT_SECS",
            DEFAULT_ACTIVITIES_API_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port,
            activities_api_url,
            request_timeout: Duration::from_secs(request_secs),
            connect_timeout: Duration::from_secs(connect_secs),
        })
    }
}

fn parse_number<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl { value: raw.to_owned(), reason: e.to_string() })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl { value: raw.to_owned(), reason: "cannot carry a path".to_owned() });
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
