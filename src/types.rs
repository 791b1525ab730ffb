use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Client credentials and the long-lived refresh token.
///
/// Loaded once at startup and never persisted. `Debug` is implemented by hand
/// so the secrets stay out of logs.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(client_id: &str, client_secret: &str, refresh_token: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            refresh_token: refresh_token.to_string(),
        }
    }

    /// Value of the `Authorization` header for the token endpoint.
    pub fn basic_auth(&self) -> String {
        let auth = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(auth.as_bytes()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("refresh_token", &"***")
            .finish()
    }
}

/// Successful answer of the token endpoint. Only the access token is used.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: Option<String>,
}

/// Error body of the accounts service, e.g. `{"error":"invalid_grant"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// A snapshot field that may be absent, `null`, or set.
///
/// `None` means the key was not sent, `Some(None)` means it was `null`. Absent
/// keys stay absent when the snapshot is written back out.
pub type Field<T> = Option<Option<T>>;

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Field<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Currently playing snapshot as returned by `/me/player/currently-playing`.
///
/// The typed fields are the ones the relay promises to its callers; anything
/// else Spotify sends is kept in `extra`. Together with [`Field`] this writes
/// a parsed body back out structurally unchanged, partial bodies included
/// (episodes carry no `album`, ads send `"item": null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub progress_ms: Field<u64>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub is_playing: Field<bool>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub item: Field<Item>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub album: Field<Album>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub artists: Field<Vec<Artist>>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Field<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub album_type: Field<String>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub artists: Field<Vec<Artist>>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub images: Field<Vec<Image>>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub name: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub name: Field<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub width: Field<u32>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub height: Field<u32>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub url: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NowPlaying {
    /// Short "Artist - Track" label for log lines.
    pub fn label(&self) -> Option<String> {
        let item = self.item.as_ref()?.as_ref()?;
        let track = item.extra.get("name").and_then(Value::as_str)?;
        let artist = item
            .artists
            .as_ref()
            .and_then(Option::as_ref)
            .and_then(|a| a.first())
            .and_then(|a| a.name.as_ref())
            .and_then(Option::as_deref);

        Some(match artist {
            Some(artist) => format!("{artist} - {track}"),
            None => track.to_string(),
        })
    }
}
