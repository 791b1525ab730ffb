//! Currently playing lookup.
//!
//! One lookup per inbound request: read the stored token, then ask Spotify.
//! The relay only returns data or a [`RelayError`]; turning either into an
//! HTTP response is the job of [`crate::api`].

use crate::{
    error::RelayError,
    spotify::SpotifyClient,
    store::{ACCESS_TOKEN_KEY, TokenStore},
    types::NowPlaying,
};

/// Looks up the currently playing track.
///
/// `Ok(None)` means nothing is playing. Fails with
/// [`RelayError::TokenUnavailable`] without calling Spotify when no token has
/// been stored yet.
pub async fn fetch_now_playing<S: TokenStore>(
    client: &SpotifyClient,
    store: &S,
) -> Result<Option<NowPlaying>, RelayError> {
    let token = store
        .get(ACCESS_TOKEN_KEY)
        .await?
        .filter(|token| !token.is_empty())
        .ok_or(RelayError::TokenUnavailable)?;

    client.currently_playing(&token).await
}
