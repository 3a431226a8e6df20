use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::provider::{commands as feed, WatchTowerAggregator};
use crate::modules::proxy::{commands as proxy, ProxyForwarder};

/// Shared state of every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<ProxyForwarder>,
    pub aggregator: Arc<WatchTowerAggregator>,
}

impl AppState {
    pub fn new(forwarder: ProxyForwarder, aggregator: WatchTowerAggregator) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
            aggregator: Arc::new(aggregator),
        }
    }
}

/// Single source of truth for all HTTP routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(feed::health))
        // Proxy layer
        .route("/api/anilist", any(proxy::proxy_anilist))
        .route("/api/jikan", any(proxy::proxy_jikan))
        .route("/api/jikan/*path", any(proxy::proxy_jikan))
        .route("/api/tmdb", any(proxy::proxy_tmdb))
        .route("/api/tmdb/*path", any(proxy::proxy_tmdb))
        .route("/api/trakt", any(proxy::proxy_trakt))
        .route("/api/trakt/*path", any(proxy::proxy_trakt))
        // Normalized feeds
        .route("/watchtower/:region", get(feed::get_board))
        .route("/watchtower/:region/:kind", get(feed::get_feed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
