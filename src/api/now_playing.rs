use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use super::AppState;
use crate::{error::RelayError, info, relay, store::TokenStore, warning};

/// Relays the currently playing snapshot, `{}` when nothing plays.
///
/// Mounted as the router fallback. Failures leave through the
/// [`IntoResponse`] impl of [`RelayError`] as a 500.
pub async fn now_playing<S: TokenStore>(
    State(state): State<AppState<S>>,
) -> Result<Response, RelayError> {
    let snapshot = relay::fetch_now_playing(&state.client, state.store.as_ref()).await?;

    Ok(match snapshot {
        Some(snapshot) => {
            if let Some(label) = snapshot.label() {
                info!("Now playing: {}", label);
            }
            Json(snapshot).into_response()
        }
        None => {
            info!("Nothing playing.");
            Json(json!({})).into_response()
        }
    })
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        warning!("Now playing lookup failed: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
