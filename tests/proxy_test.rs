/// HTTP surface: `/api/{provider}` proxy and `/watchtower` feeds
mod utils;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use utils::{helpers, FakeTransport};
use watchtower_lib::commands::build_router;

fn app(transport: &Arc<FakeTransport>) -> Router {
    build_router(helpers::build_state(&helpers::test_config(), transport.clone()))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ================================================================================================
// PROXY
// ================================================================================================

#[tokio::test]
async fn tmdb_proxy_strips_prefix_and_injects_key() {
    let transport = Arc::new(FakeTransport::new().json("themoviedb.org", json!({"id": 550})));

    let response = app(&transport)
        .oneshot(get("/api/tmdb/movie/550?api_key=client-key&language=en-US"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 550}));

    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "https://api.themoviedb.org/3/movie/550?language=en-US");
    assert_eq!(sent.query_value("api_key"), Some("tmdb-server-key"));
}

#[tokio::test]
async fn bare_provider_prefix_reaches_upstream_root() {
    let transport = Arc::new(
        FakeTransport::new()
            .json("themoviedb.org", json!({"ok": true}))
            .json("jikan.moe", json!({"ok": true})),
    );

    let response = app(&transport)
        .oneshot(get("/api/tmdb?language=en-US"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&transport).oneshot(get("/api/jikan")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sent = transport.requests();
    assert_eq!(sent[0].url, "https://api.themoviedb.org/3?language=en-US");
    assert_eq!(sent[0].query_value("api_key"), Some("tmdb-server-key"));
    assert_eq!(sent[1].url, "https://api.jikan.moe/v4");
}

#[tokio::test]
async fn trakt_proxy_injects_headers() {
    let transport = Arc::new(FakeTransport::new().json("api.trakt.tv", json!([])));

    let request = Request::builder()
        .uri("/api/trakt/movies/trending?page=1")
        .header("trakt-api-key", "from-browser")
        .body(Body::empty())
        .unwrap();
    let response = app(&transport).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "https://api.trakt.tv/movies/trending?page=1");
    assert_eq!(sent.header_value("trakt-api-key"), Some("trakt-server-key"));
    assert_eq!(sent.header_value("trakt-api-version"), Some("2"));
    assert_eq!(sent.header_value("content-type"), Some("application/json"));
}

#[tokio::test]
async fn upstream_status_and_body_pass_through() {
    let transport = Arc::new(FakeTransport::new().status("jikan", 404, "{\"status\":404}"));

    let response = app(&transport)
        .oneshot(get("/api/jikan/anime/999999999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"status": 404}));
    assert_eq!(transport.requests()[0].url, "https://api.jikan.moe/v4/anime/999999999");
}

#[tokio::test]
async fn forwarding_failure_returns_error_envelope() {
    let transport = Arc::new(FakeTransport::new());

    let response = app(&transport)
        .oneshot(get("/api/jikan/top/anime"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"error": "Jikan proxy error"}));
}

#[tokio::test]
async fn anilist_proxy_reserializes_json_body() {
    let transport = Arc::new(FakeTransport::new().json("anilist", json!({"data": {"Page": {"media": []}}})));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/anilist")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"query": "{ Page { media { id } } }", "variables": {"page": 1}}"#))
        .unwrap();
    let response = app(&transport).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sent = &transport.requests()[0];
    let sent_body: Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent.url, "https://graphql.anilist.co");
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.header_value("content-type"), Some("application/json"));
    assert_eq!(sent_body["variables"]["page"], 1);
}

#[tokio::test]
async fn anilist_proxy_rejects_bad_json_and_other_methods() {
    let transport = Arc::new(FakeTransport::new());

    let bad_body = Request::builder()
        .method(Method::POST)
        .uri("/api/anilist")
        .body(Body::from("query {"))
        .unwrap();
    let response = app(&transport).oneshot(bad_body).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"error": "AniList proxy error"}));

    let response = app(&transport).oneshot(get("/api/anilist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({"error": "Method not allowed"}));

    assert_eq!(transport.call_count(), 0);
}

// ================================================================================================
// FEEDS
// ================================================================================================

#[tokio::test]
async fn feed_endpoint_serves_normalized_items() {
    let transport = Arc::new(
        FakeTransport::new()
            .json("/movie/top_rated", json!({"results": [{"id": 238, "title": "The Godfather", "vote_average": 8.7}]}))
            .json("/tv/top_rated", json!({"results": []}))
            .json("api.trakt.tv", json!([])),
    );

    let response = app(&transport)
        .oneshot(get("/watchtower/west/top-rated"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    assert_eq!(items[0]["id"], "west-tmdb-movie-238");
    assert_eq!(items[0]["type"], "movie");
    assert_eq!(items[0]["rating"], 8.7);
    assert_eq!(items[0]["_meta"]["source"], "tmdb");
}

#[tokio::test]
async fn board_endpoint_has_every_feed() {
    let transport = Arc::new(FakeTransport::new().status("", 503, "down"));

    let response = app(&transport).oneshot(get("/watchtower/east")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"trending": [], "upcoming": [], "topRated": [], "recommended": []})
    );
}

#[tokio::test]
async fn unknown_region_or_kind_is_bad_request() {
    let transport = Arc::new(FakeTransport::new());

    let response = app(&transport)
        .oneshot(get("/watchtower/north/trending"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let response = app(&transport)
        .oneshot(get("/watchtower/east/popular"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_check() {
    let transport = Arc::new(FakeTransport::new());

    let response = app(&transport).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}
