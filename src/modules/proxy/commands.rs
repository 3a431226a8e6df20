use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::commands::AppState;
use crate::modules::content::ContentProvider;

/// `POST /api/anilist`
pub async fn proxy_anilist(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "error": "Method not allowed" })),
        )
            .into_response();
    }

    state.forwarder.forward_anilist(&body).await
}

pub async fn proxy_jikan(
    state: State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    proxy_rest(ContentProvider::Jikan, state, method, uri, headers, body).await
}

pub async fn proxy_tmdb(
    state: State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    proxy_rest(ContentProvider::Tmdb, state, method, uri, headers, body).await
}

pub async fn proxy_trakt(
    state: State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    proxy_rest(ContentProvider::Trakt, state, method, uri, headers, body).await
}

async fn proxy_rest(
    provider: ContentProvider,
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let prefix = format!("/api/{}", provider.as_str());
    let path = uri.path().strip_prefix(&prefix).unwrap_or(uri.path());

    state
        .forwarder
        .forward_rest(provider, method, path, uri.query(), &headers, body)
        .await
}
