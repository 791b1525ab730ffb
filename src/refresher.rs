//! Scheduled access token refresh.
//!
//! [`refresh_access_token`] performs one refresh-token grant and stores the
//! result. [`run_schedule`] repeats it on a fixed interval for as long as the
//! process lives. A failed tick is logged and the next tick runs as planned;
//! there is no retry in between and no expiry tracking, the stored token is
//! simply overwritten every interval.

use std::{sync::Arc, time::Duration};

use tokio::time::{self, MissedTickBehavior};

use crate::{
    error::RefreshError,
    spotify::SpotifyClient,
    store::{ACCESS_TOKEN_KEY, TokenStore},
    success,
    types::Credentials,
    warning,
};

/// Exchanges the refresh token and overwrites the stored access token.
///
/// Returns the new access token. The store is left untouched on any error,
/// including a successful exchange that carried no token.
pub async fn refresh_access_token<S: TokenStore>(
    client: &SpotifyClient,
    credentials: &Credentials,
    store: &S,
) -> Result<String, RefreshError> {
    let token = client.exchange_refresh_token(credentials).await?;
    store.put(ACCESS_TOKEN_KEY, &token).await?;
    Ok(token)
}

/// Refreshes immediately, then once every `period`. Never returns.
pub async fn run_schedule<S: TokenStore>(
    client: SpotifyClient,
    credentials: Credentials,
    store: Arc<S>,
    period: Duration,
) {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        match refresh_access_token(&client, &credentials, store.as_ref()).await {
            Ok(_) => success!("Access token refreshed."),
            Err(e) => warning!("Scheduled token refresh failed: {}", e),
        }
    }
}
