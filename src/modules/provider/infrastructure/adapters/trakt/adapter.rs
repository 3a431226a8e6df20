use async_trait::async_trait;
use futures::future::try_join;
use std::sync::Arc;

use crate::{
    modules::content::{ContentItem, ContentProvider, MediaType, PlaceholderProvider},
    modules::provider::{
        infrastructure::http_client::{HttpRequest, RateLimitClient},
        traits::ContentSource,
    },
    shared::errors::AppResult,
};

use super::{mapper::TraktMapper, models::*};

pub const TRAKT_API_VERSION: &str = "2";
const PAGE_LIMIT: u32 = 20;

/// Trakt REST adapter. Trakt has no upcoming list.
pub struct TraktAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: Option<String>,
    mapper: TraktMapper,
}

impl TraktAdapter {
    pub fn new(
        http_client: RateLimitClient,
        base_url: impl Into<String>,
        api_key: Option<String>,
        placeholders: Arc<dyn PlaceholderProvider>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            mapper: TraktMapper::new(placeholders),
        }
    }

    fn build_request(&self, endpoint: &str) -> HttpRequest {
        let mut request = HttpRequest::get(format!("{}{}", self.base_url, endpoint))
            .header("Content-Type", "application/json")
            .header("trakt-api-version", TRAKT_API_VERSION)
            .query("page", "1")
            .query("limit", PAGE_LIMIT.to_string())
            .query("extended", "full");
        if let Some(api_key) = &self.api_key {
            request = request.header("trakt-api-key", api_key.clone());
        }
        request
    }

    async fn fetch_entries(&self, endpoint: &str) -> AppResult<Vec<TraktEntry>> {
        log::info!("Trakt: Fetching {}", endpoint);
        self.http_client
            .request_json(self.build_request(endpoint))
            .await
    }

    async fn fetch_movies_and_shows(&self, list: &str) -> AppResult<Vec<ContentItem>> {
        let movie_endpoint = format!("/movies/{}", list);
        let show_endpoint = format!("/shows/{}", list);

        let (movies, shows) = try_join(
            self.fetch_entries(&movie_endpoint),
            self.fetch_entries(&show_endpoint),
        )
        .await?;

        let mut items = self.mapper.map_entries(movies, MediaType::Movie);
        items.extend(self.mapper.map_entries(shows, MediaType::Tv));

        log::info!("Trakt: {} lists returned {} items", list, items.len());
        Ok(items)
    }
}

#[async_trait]
impl ContentSource for TraktAdapter {
    fn provider(&self) -> ContentProvider {
        ContentProvider::Trakt
    }

    async fn trending(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_movies_and_shows("trending").await
    }

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>> {
        Ok(Vec::new())
    }

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_movies_and_shows("popular").await
    }
}
