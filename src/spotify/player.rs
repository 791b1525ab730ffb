use reqwest::StatusCode;

use super::SpotifyClient;
use crate::{error::RelayError, types::NowPlaying};

impl SpotifyClient {
    /// Fetches what the token's owner is listening to right now.
    ///
    /// Returns `Ok(None)` on 204, Spotify's answer when nothing is playing.
    /// Any non-2xx status is reported as [`RelayError::UpstreamStatus`]; an
    /// expired token is not told apart from other failures. A 2xx body that
    /// cannot be read as a snapshot object gives
    /// [`RelayError::UpstreamBodyUnacceptable`].
    pub async fn currently_playing(&self, token: &str) -> Result<Option<NowPlaying>, RelayError> {
        let api_url = format!("{uri}/me/player/currently-playing", uri = self.api_url);

        let res = self.http.get(&api_url).bearer_auth(token).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = res
            .bytes()
            .await
            .map_err(|_| RelayError::UpstreamBodyUnacceptable)?;

        serde_json::from_slice::<NowPlaying>(&body)
            .map(Some)
            .map_err(|_| RelayError::UpstreamBodyUnacceptable)
    }
}
