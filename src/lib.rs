pub mod commands;
pub mod modules;
pub mod shared;

use anyhow::Context;
use std::sync::Arc;

use commands::{build_router, AppState};
use modules::{
    content::{PlaceholderProvider, RandomPlaceholders},
    provider::{
        infrastructure::{
            adapters::jikan::JIKAN_REQUESTS_PER_SECOND, AniListAdapter, HttpTransport,
            InMemoryQueryCache, JikanAdapter, RateLimitClient, ReqwestTransport, RetryPolicy,
            TmdbAdapter, TmdbArtworkDecorator, TraktAdapter,
        },
        ContentSource, WatchTowerAggregator,
    },
    proxy::ProxyForwarder,
};
use shared::{utils::init_logger, AppConfig};

/// Wire adapters, aggregator and proxy over `transport`
pub fn build_state(config: &AppConfig, transport: Arc<dyn HttpTransport>) -> AppState {
    build_state_with(config, transport, Arc::new(RandomPlaceholders::default()))
}

pub fn build_state_with(
    config: &AppConfig,
    transport: Arc<dyn HttpTransport>,
    placeholders: Arc<dyn PlaceholderProvider>,
) -> AppState {
    let retry_policy = RetryPolicy::new(config.max_retries, config.retry_base_delay);
    let client = |name: &str| RateLimitClient::new(name, transport.clone(), retry_policy.clone());
    let endpoints = &config.endpoints;

    let anilist = AniListAdapter::new(client("AniList"), &endpoints.anilist, placeholders.clone())
        .with_cache(Arc::new(InMemoryQueryCache::new()));
    let jikan = JikanAdapter::new(
        client("Jikan").with_rate_limit(JIKAN_REQUESTS_PER_SECOND),
        &endpoints.jikan,
        placeholders.clone(),
    );
    let tmdb = Arc::new(TmdbAdapter::new(
        client("TMDB"),
        &endpoints.tmdb,
        config.tmdb_api_key.clone(),
        placeholders.clone(),
    ));
    let trakt: Arc<dyn ContentSource> = Arc::new(TraktAdapter::new(
        client("Trakt"),
        &endpoints.trakt,
        config.trakt_api_key.clone(),
        placeholders,
    ));

    // Trakt has no artwork of its own
    let trakt = if config.tmdb_api_key.is_some() {
        log::info!("Trakt items will be enriched with TMDB artwork");
        Arc::new(TmdbArtworkDecorator::new(trakt, tmdb.clone())) as Arc<dyn ContentSource>
    } else {
        trakt
    };

    let east: Vec<Arc<dyn ContentSource>> = vec![Arc::new(anilist), Arc::new(jikan)];
    let west: Vec<Arc<dyn ContentSource>> = vec![tmdb, trakt];
    let aggregator = WatchTowerAggregator::new(east, west);
    let forwarder = ProxyForwarder::new(
        transport,
        endpoints.clone(),
        config.tmdb_api_key.clone(),
        config.trakt_api_key.clone(),
    );

    AppState::new(forwarder, aggregator)
}

pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    let transport = Arc::new(ReqwestTransport::new(config.http_timeout, &config.user_agent)?);
    let app = build_router(build_state(&config, transport));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    log::info!("WatchTower listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
