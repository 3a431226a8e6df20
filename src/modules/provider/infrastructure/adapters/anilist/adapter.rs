//! AniList provider adapter
//!
//! GraphQL-based adapter. Every feed is one `Page` query; responses are
//! memoized per exact query and variables when a cache is attached.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    modules::content::{ContentItem, ContentProvider, PlaceholderProvider},
    modules::provider::{
        infrastructure::{
            cache::QueryCache,
            http_client::{HttpRequest, RateLimitClient},
        },
        traits::ContentSource,
    },
    shared::errors::{AppError, AppResult},
};

use super::{mapper::AniListMapper, models::*, queries::*};

/// AniList provider adapter with GraphQL API
pub struct AniListAdapter {
    http_client: RateLimitClient,
    base_url: String,
    cache: Option<Arc<dyn QueryCache>>,
    mapper: AniListMapper,
}

impl AniListAdapter {
    pub fn new(
        http_client: RateLimitClient,
        base_url: impl Into<String>,
        placeholders: Arc<dyn PlaceholderProvider>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            cache: None,
            mapper: AniListMapper::new(placeholders),
        }
    }

    /// Memoize responses in `cache`
    pub fn with_cache(mut self, cache: Arc<dyn QueryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Make a GraphQL request to AniList API and return its `data` field
    async fn make_graphql_request<T>(&self, query: &str, variables: Value) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let body = json!({
            "query": query,
            "variables": variables
        });
        let cache_key = body.to_string();

        if let Some(data) = self.cache.as_ref().and_then(|cache| cache.get(&cache_key)) {
            log::debug!("AniList: Serving cached response");
            return Self::decode_data(data);
        }

        log::debug!("AniList: Sending GraphQL request variables: {}", body["variables"]);

        let graphql_response: Value = self
            .http_client
            .request_json(HttpRequest::post_json(&self.base_url, &body))
            .await?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response
            .get("errors")
            .filter(|errors| !errors.is_null())
        {
            log::error!("AniList: GraphQL errors in response: {}", errors);
            return Err(AppError::ApiError(format!(
                "AniList GraphQL errors: {}",
                errors
            )));
        }

        let data = graphql_response
            .get("data")
            .filter(|data| !data.is_null())
            .cloned()
            .ok_or_else(|| AppError::ApiError("No data field in AniList response".to_string()))?;

        if let Some(cache) = &self.cache {
            cache.set(cache_key, data.clone());
        }

        Self::decode_data(data)
    }

    fn decode_data<T: DeserializeOwned>(data: Value) -> AppResult<T> {
        serde_json::from_value(data).map_err(|e| {
            AppError::SerializationError(format!("Failed to deserialize AniList data: {}", e))
        })
    }

    async fn fetch_page(&self, variables: Value, feed: &str) -> AppResult<Vec<ContentItem>> {
        let response: AniListPageData = self
            .make_graphql_request(MEDIA_PAGE_QUERY, variables)
            .await?;

        let items = self.mapper.map_media_list(response.page.media);
        log::info!("AniList: {} feed returned {} items", feed, items.len());
        Ok(items)
    }
}

#[async_trait]
impl ContentSource for AniListAdapter {
    fn provider(&self) -> ContentProvider {
        ContentProvider::AniList
    }

    async fn trending(&self) -> AppResult<Vec<ContentItem>> {
        let variables = json!({
            "page": 1,
            "perPage": PER_PAGE,
            "sort": [SORT_TRENDING]
        });
        self.fetch_page(variables, "trending").await
    }

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>> {
        let variables = json!({
            "page": 1,
            "perPage": PER_PAGE,
            "sort": [SORT_START_DATE],
            "statusNotIn": UPCOMING_EXCLUDED_STATUSES
        });
        self.fetch_page(variables, "upcoming").await
    }

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>> {
        let variables = json!({
            "page": 1,
            "perPage": PER_PAGE,
            "sort": [SORT_SCORE]
        });
        self.fetch_page(variables, "top rated").await
    }
}
