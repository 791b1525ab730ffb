use reqwest::header::AUTHORIZATION;

use super::SpotifyClient;
use crate::{
    error::RefreshError,
    types::{AccessTokenResponse, AuthErrorResponse, Credentials},
};

impl SpotifyClient {
    /// Exchanges the refresh token for a new access token.
    ///
    /// Sends the refresh-token grant as a form body, authenticated with the
    /// client credentials as HTTP Basic. Only the access token of the answer
    /// is returned; Spotify may rotate the refresh token too, which is
    /// ignored since the configured one stays valid.
    ///
    /// # Errors
    ///
    /// - [`RefreshError::Request`] on network failure
    /// - [`RefreshError::Rejected`] on a non-2xx answer, e.g. a revoked grant
    /// - [`RefreshError::Decode`] when a 2xx body is not JSON
    /// - [`RefreshError::MissingToken`] when a 2xx body has no access token
    pub async fn exchange_refresh_token(
        &self,
        credentials: &Credentials,
    ) -> Result<String, RefreshError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, credentials.basic_auth())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", credentials.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let reason = match serde_json::from_slice::<AuthErrorResponse>(&body) {
                Ok(AuthErrorResponse {
                    error,
                    error_description: Some(description),
                }) => format!("{error} ({description})"),
                Ok(AuthErrorResponse { error, .. }) => error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or(status.as_str())
                    .to_string(),
            };
            return Err(RefreshError::Rejected { status, reason });
        }

        let json: AccessTokenResponse = serde_json::from_slice(&body)?;

        json.access_token
            .filter(|token| !token.is_empty())
            .ok_or(RefreshError::MissingToken)
    }
}
