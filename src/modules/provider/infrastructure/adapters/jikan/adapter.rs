//! Jikan (MyAnimeList) provider adapter

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    modules::content::{ContentItem, ContentProvider, PlaceholderProvider},
    modules::provider::{
        infrastructure::http_client::{HttpRequest, RateLimitClient},
        traits::ContentSource,
    },
    shared::errors::AppResult,
};

use super::{mapper::JikanMapper, models::*};

/// Jikan allows roughly 3 requests per second
pub const JIKAN_REQUESTS_PER_SECOND: u32 = 3;

const TRENDING_LIMIT: u32 = 20;
const LIST_LIMIT: u32 = 24;

/// Jikan REST adapter
pub struct JikanAdapter {
    http_client: RateLimitClient,
    base_url: String,
    mapper: JikanMapper,
}

impl JikanAdapter {
    pub fn new(
        http_client: RateLimitClient,
        base_url: impl Into<String>,
        placeholders: Arc<dyn PlaceholderProvider>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mapper: JikanMapper::new(placeholders),
        }
    }

    async fn fetch_list(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> AppResult<Vec<ContentItem>> {
        let request = params.iter().fold(
            HttpRequest::get(format!("{}{}", self.base_url, endpoint)),
            |request, (key, value)| request.query(*key, value.clone()),
        );

        log::info!("Jikan: Fetching {}", endpoint);

        let response: JikanList<Anime> = self.http_client.request_json(request).await?;
        let items = self.mapper.map_anime_list(response.data);

        log::info!("Jikan: {} returned {} items", endpoint, items.len());
        Ok(items)
    }
}

#[async_trait]
impl ContentSource for JikanAdapter {
    fn provider(&self) -> ContentProvider {
        ContentProvider::Jikan
    }

    async fn trending(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_list(
            "/top/anime",
            &[
                ("filter", "airing".to_string()),
                ("limit", TRENDING_LIMIT.to_string()),
            ],
        )
        .await
    }

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_list("/seasons/upcoming", &[("limit", LIST_LIMIT.to_string())])
            .await
    }

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_list("/top/anime", &[("limit", LIST_LIMIT.to_string())])
            .await
    }
}
