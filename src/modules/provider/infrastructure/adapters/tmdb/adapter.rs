use async_trait::async_trait;
use futures::future::try_join;
use std::sync::Arc;

use crate::{
    modules::content::{ContentItem, ContentProvider, MediaType, PlaceholderProvider},
    modules::provider::{
        infrastructure::http_client::{HttpRequest, RateLimitClient},
        traits::ContentSource,
    },
    shared::errors::{AppError, AppResult},
};

use super::{mapper::TmdbMapper, models::*};

/// TMDB (The Movie Database) provider adapter with REST API
pub struct TmdbAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: Option<String>,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    /// `api_key` may be omitted when `base_url` points at a proxy that
    /// injects it.
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
            mapper: TmdbMapper::new(placeholders),
        }
    }

    /// Build a GET request with the API key and default parameters
    fn build_request(&self, endpoint: &str) -> HttpRequest {
        let mut request = HttpRequest::get(format!("{}{}", self.base_url, endpoint));
        if let Some(api_key) = &self.api_key {
            request = request.query("api_key", api_key.clone());
        }
        request.query("language", "en-US")
    }

    async fn fetch_page(&self, endpoint: &str) -> AppResult<Vec<TmdbMedia>> {
        let request = self.build_request(endpoint).query("page", "1");
        log::info!("TMDB: Fetching {}", endpoint);

        let response: TmdbPagedResponse<TmdbMedia> = self.http_client.request_json(request).await?;
        Ok(response.results)
    }

    /// Movie list and TV list fetched in parallel, movies first
    async fn fetch_movie_and_tv(
        &self,
        movie_endpoint: &str,
        tv_endpoint: &str,
    ) -> AppResult<Vec<ContentItem>> {
        let (movies, shows) =
            try_join(self.fetch_page(movie_endpoint), self.fetch_page(tv_endpoint)).await?;

        let mut items = self.mapper.map_media_list(movies, MediaType::Movie);
        items.extend(self.mapper.map_media_list(shows, MediaType::Tv));

        log::info!(
            "TMDB: {} + {} returned {} items",
            movie_endpoint,
            tv_endpoint,
            items.len()
        );
        Ok(items)
    }

    fn media_segment(media_type: MediaType) -> AppResult<&'static str> {
        match media_type {
            MediaType::Movie | MediaType::Tv => Ok(media_type.as_str()),
            MediaType::Anime => Err(AppError::InvalidInput(
                "TMDB lookups need a movie or tv media type".to_string(),
            )),
        }
    }

    /// Details of a single movie or show
    pub async fn details(&self, media_type: MediaType, id: u64) -> AppResult<TmdbMedia> {
        let segment = Self::media_segment(media_type)?;
        let request = self.build_request(&format!("/{}/{}", segment, id));
        self.http_client.request_json(request).await
    }

    /// Videos attached to a single movie or show
    pub async fn videos(&self, media_type: MediaType, id: u64) -> AppResult<Vec<TmdbVideo>> {
        let segment = Self::media_segment(media_type)?;
        let request = self.build_request(&format!("/{}/{}/videos", segment, id));
        let response: TmdbVideosResponse = self.http_client.request_json(request).await?;
        Ok(response.results)
    }
}

#[async_trait]
impl ContentSource for TmdbAdapter {
    fn provider(&self) -> ContentProvider {
        ContentProvider::Tmdb
    }

    async fn trending(&self) -> AppResult<Vec<ContentItem>> {
        let results = self.fetch_page("/trending/all/day").await?;
        let items = self.mapper.map_trending(results);
        log::info!("TMDB: trending returned {} items", items.len());
        Ok(items)
    }

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_movie_and_tv("/movie/upcoming", "/tv/on_the_air")
            .await
    }

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>> {
        self.fetch_movie_and_tv("/movie/top_rated", "/tv/top_rated")
            .await
    }
}
