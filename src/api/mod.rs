//! # API Module
//!
//! HTTP surface of the relay. There is a single handler, [`now_playing`],
//! mounted as the router fallback so every method and path reaches it.
//!
//! ## Endpoints
//!
//! - `*` (any method, any path) - [`now_playing`], the currently playing
//!   snapshot of the account behind the stored access token
//!
//! ## Responses
//!
//! - `200` with the snapshot as JSON, passed through as Spotify sent it
//! - `200` with `{}` when nothing is playing (Spotify answered 204)
//! - `500` with `{"error": "<message>"}` for every [`RelayError`]
//!
//! The caller always gets a JSON body; the kinds of failure are not told
//! apart by status code.
//!
//! ## State
//!
//! Handlers share an [`AppState`]: the upstream client and the token store.
//! The store is generic so tests can hand in a
//! [`MemoryStore`](crate::store::MemoryStore) while `serve` uses the file
//! store.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nowplaying::{api::AppState, server::create_router, spotify::SpotifyClient, store::MemoryStore};
//!
//! let state = AppState::new(SpotifyClient::from_env()?, Arc::new(MemoryStore::new()));
//! let app = create_router(state);
//! ```
//!
//! [`RelayError`]: crate::error::RelayError

use std::sync::Arc;

use crate::{spotify::SpotifyClient, store::TokenStore};

mod now_playing;

pub use now_playing::now_playing;

/// Shared handler state: the upstream client and the token store.
pub struct AppState<S> {
    pub client: SpotifyClient,
    pub store: Arc<S>,
}

impl<S: TokenStore> AppState<S> {
    pub fn new(client: SpotifyClient, store: Arc<S>) -> Self {
        Self { client, store }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: Arc::clone(&self.store),
        }
    }
}
