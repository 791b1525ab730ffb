//! # Spotify Integration Module
//!
//! Thin HTTP client for the two upstream endpoints the relay needs:
//!
//! - `POST /api/token` on the accounts service, refresh-token grant
//!   ([`SpotifyClient::exchange_refresh_token`])
//! - `GET /me/player/currently-playing` on the Web API
//!   ([`SpotifyClient::currently_playing`])
//!
//! Both base URLs come from configuration so tests can point the client at a
//! local mock. No call is retried and no timeout is set beyond reqwest's
//! defaults.

use reqwest::Client;

use crate::config;

pub mod auth;
pub mod player;

/// Shared upstream client. Cheap to clone, the underlying connection pool is
/// reference counted.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(token_url: &str, api_url: &str, user_agent: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(http, token_url, api_url))
    }

    /// Uses an already configured reqwest client.
    pub fn with_client(http: Client, token_url: &str, api_url: &str) -> Self {
        Self {
            http,
            token_url: token_url.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL` and
    /// `USER_AGENT`.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(
            &config::spotify_apitoken_url(),
            &config::spotify_apiurl(),
            &config::user_agent(),
        )
    }
}
