//! # Token Store
//!
//! The single key-value cell shared by the refresher and the relay. Both
//! entry points receive the store explicitly, so tests can swap in
//! [`MemoryStore`] while deployments use [`FileStore`].
//!
//! Only one key is used in practice, [`ACCESS_TOKEN_KEY`]. The store does no
//! locking across keys and offers no transactions; a reader may observe the
//! token from before or after a concurrent refresh.

use std::future::Future;

use crate::error::StoreError;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the current bearer token is kept.
pub const ACCESS_TOKEN_KEY: &str = "spotify_access_token";

/// Get/put capability over string keys and values.
pub trait TokenStore: Send + Sync + 'static {
    /// Returns the value for `key`, `None` when it was never written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Overwrites the value for `key`.
    fn put(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
