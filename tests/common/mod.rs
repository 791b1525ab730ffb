//! Local stand-in for the Spotify accounts service and Web API.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use nowplaying::spotify::SpotifyClient;

pub const SNAPSHOT: &str = r#"{
  "timestamp": 1700000000000,
  "context": null,
  "progress_ms": 42000,
  "is_playing": true,
  "currently_playing_type": "track",
  "item": {
    "album": {
      "album_type": "album",
      "artists": [{ "name": "Daft Punk", "type": "artist", "id": "4tZwfgrHOc3mvqYlEYSvVi" }],
      "images": [{ "width": 640, "height": 640, "url": "https://i.scdn.co/image/ab67616d0000b273" }],
      "name": "Discovery"
    },
    "artists": [{ "name": "Daft Punk", "type": "artist", "id": "4tZwfgrHOc3mvqYlEYSvVi" }],
    "duration_ms": 320357,
    "name": "One More Time",
    "explicit": false
  }
}"#;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub player_hits: usize,
    pub token_hits: usize,
    pub bearer: Option<String>,
    pub basic: Option<String>,
    pub form: Option<String>,
    pub player_user_agent: Option<String>,
    pub token_user_agent: Option<String>,
}

struct MockState {
    player: Reply,
    token: Reply,
    recorded: Recorded,
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockUpstream {
    pub addr: SocketAddr,
    state: Shared,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState {
            player: Reply {
                status: StatusCode::OK,
                body: SNAPSHOT.to_string(),
            },
            token: Reply {
                status: StatusCode::OK,
                body: r#"{"access_token":"fresh","token_type":"Bearer","expires_in":3600}"#
                    .to_string(),
            },
            recorded: Recorded::default(),
        }));

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me/player/currently-playing", get(player))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn token_url(&self) -> String {
        format!("http://{}/api/token", self.addr)
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn client(&self) -> SpotifyClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .user_agent("nowplaying-test")
            .build()
            .unwrap();

        SpotifyClient::with_client(http, &self.token_url(), &self.api_url())
    }

    pub fn set_player(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().player = Reply {
            status,
            body: body.to_string(),
        };
    }

    pub fn set_token(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().token = Reply {
            status,
            body: body.to_string(),
        };
    }

    pub fn recorded(&self) -> Recorded {
        self.state.lock().unwrap().recorded.clone()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn reply(reply: &Reply) -> Response {
    if reply.status == StatusCode::NO_CONTENT {
        return StatusCode::NO_CONTENT.into_response();
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
        .into_response()
}

async fn player(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    state.recorded.player_hits += 1;
    state.recorded.bearer = header_value(&headers, header::AUTHORIZATION);
    state.recorded.player_user_agent = header_value(&headers, header::USER_AGENT);
    reply(&state.player)
}

async fn token(State(state): State<Shared>, headers: HeaderMap, body: String) -> Response {
    let mut state = state.lock().unwrap();
    state.recorded.token_hits += 1;
    state.recorded.basic = header_value(&headers, header::AUTHORIZATION);
    state.recorded.token_user_agent = header_value(&headers, header::USER_AGENT);
    state.recorded.form = Some(body);
    reply(&state.token)
}
