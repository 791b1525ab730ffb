use axum::Router;
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, info, store::TokenStore};

/// Router with the relay mounted for every method and path.
pub fn create_router<S: TokenStore>(state: api::AppState<S>) -> Router {
    Router::new()
        .fallback(api::now_playing::<S>)
        .with_state(state)
}

pub async fn start_api_server<S: TokenStore>(addr: &str, state: api::AppState<S>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {addr}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
