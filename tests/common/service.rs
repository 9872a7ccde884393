//! Local stand-in for the Apple Music library endpoints.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use serde_json::{Value, json};

pub const DEVELOPER_TOKEN: &str = "d";
pub const USER_TOKEN: &str = "u";

#[derive(Debug, Default)]
pub struct ServiceState {
    pub playlists: Vec<Value>,
    pub tracks: HashMap<String, Vec<Value>>,
    pub created_bodies: Vec<Value>,
    pub create_returns_empty: bool,
    pub plain_text_failure: bool,
}

pub type SharedState = Arc<Mutex<ServiceState>>;

/// Starts the service on an ephemeral port and returns its API base URL.
pub async fn spawn_service(state: SharedState) -> String {
    let app = Router::new()
        .route(
            "/v1/me/library/playlists",
            get(list_playlists).post(create_playlist),
        )
        .route("/v1/me/library/playlists/{id}/tracks", get(list_tracks))
        .layer(Extension(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}

fn error_document(status: StatusCode, title: &str, detail: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "errors": [{
                "id": "TEST",
                "status": status.as_u16().to_string(),
                "code": status.as_u16().to_string(),
                "title": title,
                "detail": detail,
            }]
        })),
    )
}

fn authorized(headers: &HeaderMap) -> bool {
    let bearer = format!("Bearer {}", DEVELOPER_TOKEN);
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(bearer.as_str())
        && headers.get("music-user-token").and_then(|v| v.to_str().ok()) == Some(USER_TOKEN)
}

async fn list_playlists(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return error_document(
            StatusCode::UNAUTHORIZED,
            "Authentication Failed",
            "Invalid music user token",
        );
    }

    let state = state.lock().unwrap();
    if state.plain_text_failure {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(Value::String("boom".to_string())));
    }

    (StatusCode::OK, Json(json!({ "data": state.playlists })))
}

async fn list_tracks(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return error_document(
            StatusCode::UNAUTHORIZED,
            "Authentication Failed",
            "Invalid music user token",
        );
    }

    let state = state.lock().unwrap();
    match state.tracks.get(&id) {
        Some(tracks) => (StatusCode::OK, Json(json!({ "data": tracks }))),
        None => error_document(
            StatusCode::NOT_FOUND,
            "Resource Not Found",
            &format!("Playlist {} has no tracks", id),
        ),
    }
}

async fn create_playlist(
    Extension(state): Extension<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return error_document(
            StatusCode::UNAUTHORIZED,
            "Authentication Failed",
            "Invalid music user token",
        );
    }

    let mut state = state.lock().unwrap();
    state.created_bodies.push(body.clone());

    if state.create_returns_empty {
        return (StatusCode::CREATED, Json(json!({ "data": [] })));
    }

    let name = body["attributes"]["name"].clone();
    (
        StatusCode::CREATED,
        Json(json!({
            "data": [{
                "id": "p.created",
                "type": "library-playlists",
                "href": "/v1/me/library/playlists/p.created",
                "attributes": { "name": name, "canEdit": true }
            }]
        })),
    )
}
