use std::sync::Arc;

use crate::{
    api::AppState,
    config, error, info, refresher,
    server::start_api_server,
    spotify::SpotifyClient,
    store::{FileStore, MemoryStore, TokenStore},
    types::Credentials,
};

/// Starts the relay and spawns the refresher next to it.
///
/// With `memory` set the token lives only in this process; otherwise it is
/// kept in the file store so a restart can serve requests before the first
/// refresh completes.
pub async fn serve(memory: bool) {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Cannot load Spotify credentials: {}", e),
    };

    let client = match SpotifyClient::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot build HTTP client: {}", e),
    };

    if memory {
        info!("Using in-memory token store.");
        run(client, credentials, MemoryStore::new()).await;
    } else {
        let store = FileStore::new(config::store_path());
        info!("Using token store at {}.", store.path().display());
        run(client, credentials, store).await;
    }
}

async fn run<S: TokenStore>(client: SpotifyClient, credentials: Credentials, store: S) {
    let period = match config::refresh_interval() {
        Ok(p) => p,
        Err(e) => error!("Invalid refresh interval: {}", e),
    };

    let store = Arc::new(store);

    info!("Refreshing access token every {} seconds.", period.as_secs());
    tokio::spawn(refresher::run_schedule(
        client.clone(),
        credentials,
        Arc::clone(&store),
        period,
    ));

    let state = AppState::new(client, store);
    if let Err(e) = start_api_server(&config::server_addr(), state).await {
        error!("Relay server stopped: {}", e);
    }
}
