use std::sync::Arc;
use std::time::Duration;

use watchtower_lib::commands::AppState;
use watchtower_lib::modules::content::{ContentItem, FixedPlaceholders, PlaceholderProvider};
use watchtower_lib::shared::AppConfig;

use super::FakeTransport;

pub const POSTER: &str = "https://placeholder.test/poster.jpg";
pub const BACKDROP: &str = "https://placeholder.test/backdrop.jpg";

pub fn placeholders() -> Arc<dyn PlaceholderProvider> {
    Arc::new(FixedPlaceholders::new(POSTER, BACKDROP))
}

/// Configuration with credentials and no retries
pub fn test_config() -> AppConfig {
    AppConfig {
        tmdb_api_key: Some("tmdb-server-key".to_string()),
        trakt_api_key: Some("trakt-server-key".to_string()),
        max_retries: 0,
        retry_base_delay: Duration::from_millis(1),
        ..AppConfig::default()
    }
}

pub fn build_state(config: &AppConfig, transport: Arc<FakeTransport>) -> AppState {
    watchtower_lib::build_state_with(config, transport, placeholders())
}

pub fn ids(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}
