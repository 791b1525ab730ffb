use crate::{config, error, refresher, spotify::SpotifyClient, store::FileStore, success};

/// Refreshes the access token in the file store once.
///
/// Exits with status 1 when the exchange or the store write fails, so an
/// external scheduler sees the failure.
pub async fn refresh() {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Cannot load Spotify credentials: {}", e),
    };

    let client = match SpotifyClient::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot build HTTP client: {}", e),
    };

    let store = FileStore::new(config::store_path());

    match refresher::refresh_access_token(&client, &credentials, &store).await {
        Ok(_) => success!("Access token stored at {}.", store.path().display()),
        Err(e) => error!("Token refresh failed: {}", e),
    }
}
