//! Configuration management for the now-playing relay.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{error::ConfigError, types::Credentials};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8787";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3000;

/// Directory holding `.env` and the default token store.
///
/// - Linux: `~/.local/share/nowplaying`
/// - macOS: `~/Library/Application Support/nowplaying`
/// - Windows: `%LOCALAPPDATA%/nowplaying`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(env!("CARGO_PKG_NAME"));
    path
}

/// Loads `.env` from the data directory if there is one.
///
/// A missing file is fine, deployments usually set the environment directly.
/// Variables already present in the environment are not overridden.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty(var)),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::Missing(var)),
    }
}

fn optional(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Reads client id, client secret and refresh token.
///
/// All three are required and must be non-empty.
pub fn credentials() -> Result<Credentials, ConfigError> {
    Ok(Credentials::new(
        &spotify_client_id()?,
        &spotify_client_secret()?,
        &spotify_refresh_token()?,
    ))
}

pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// The client secret. Keep it out of logs and version control.
pub fn spotify_client_secret() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn spotify_refresh_token() -> Result<String, ConfigError> {
    required("SPOTIFY_API_REFRESH_TOKEN")
}

/// Token endpoint, e.g. "https://accounts.spotify.com/api/token".
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Web API base URL, e.g. "https://api.spotify.com/v1".
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn server_addr() -> String {
    optional("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

pub fn user_agent() -> String {
    optional("USER_AGENT").unwrap_or_else(|| {
        format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    })
}

/// Where the file backed token store lives.
pub fn store_path() -> PathBuf {
    optional("STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("store.json"))
}

/// Time between two scheduled refreshes. Defaults to 50 minutes, Spotify
/// access tokens live for an hour.
pub fn refresh_interval() -> Result<Duration, ConfigError> {
    let var = "REFRESH_INTERVAL_SECS";
    let Some(raw) = optional(var) else {
        return Ok(Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}
