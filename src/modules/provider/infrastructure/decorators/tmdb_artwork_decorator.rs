use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::modules::content::{ContentItem, ContentProvider, TmdbRef};
use crate::modules::provider::infrastructure::adapters::tmdb::{TmdbAdapter, TmdbMapper};
use crate::modules::provider::traits::ContentSource;
use crate::shared::errors::AppResult;

/// Maximum enrichment lookups in flight per feed
pub const MAX_CONCURRENT_LOOKUPS: usize = 5;

/// Decorator that fills artwork, synopsis and trailer of another source's
/// items from TMDB.
///
/// Only items carrying a TMDB reference are looked up. A failed lookup
/// leaves the item as the inner source produced it.
pub struct TmdbArtworkDecorator {
    /// The wrapped source
    inner: Arc<dyn ContentSource>,
    tmdb: Arc<TmdbAdapter>,
}

impl TmdbArtworkDecorator {
    pub fn new(inner: Arc<dyn ContentSource>, tmdb: Arc<TmdbAdapter>) -> Self {
        Self { inner, tmdb }
    }

    async fn enrich_all(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        stream::iter(items)
            .map(|item| self.enrich(item))
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await
    }

    async fn enrich(&self, mut item: ContentItem) -> ContentItem {
        let Some(TmdbRef { id, media_type }) = item.meta.tmdb.clone() else {
            return item;
        };

        match self.tmdb.details(media_type, id).await {
            Ok(details) => {
                if let Some(poster) = TmdbMapper::poster_url(details.poster_path.as_deref()) {
                    item.poster = poster;
                }
                if let Some(backdrop) = TmdbMapper::backdrop_url(details.backdrop_path.as_deref()) {
                    item.backdrop = backdrop;
                }
                if item.synopsis.trim().is_empty() {
                    if let Some(overview) = details.overview.filter(|o| !o.trim().is_empty()) {
                        item.synopsis = overview;
                    }
                }
            }
            Err(e) => {
                log::debug!("TMDB details lookup failed for {}: {}", item.id, e);
                return item;
            }
        }

        if item.trailer_url.is_none() {
            match self.tmdb.videos(media_type, id).await {
                Ok(videos) => item.trailer_url = TmdbMapper::pick_trailer(&videos),
                Err(e) => log::debug!("TMDB videos lookup failed for {}: {}", item.id, e),
            }
        }

        item
    }
}

#[async_trait]
impl ContentSource for TmdbArtworkDecorator {
    fn provider(&self) -> ContentProvider {
        self.inner.provider()
    }

    async fn trending(&self) -> AppResult<Vec<ContentItem>> {
        let items = self.inner.trending().await?;
        Ok(self.enrich_all(items).await)
    }

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>> {
        let items = self.inner.upcoming().await?;
        Ok(self.enrich_all(items).await)
    }

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>> {
        let items = self.inner.top_rated().await?;
        Ok(self.enrich_all(items).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::{ContentDraft, FixedPlaceholders, MediaType};
    use crate::modules::provider::infrastructure::http_client::{
        HttpResponse, MockHttpTransport, RateLimitClient, RetryPolicy,
    };
    use crate::modules::provider::traits::MockContentSource;
    use serde_json::json;

    fn trakt_item(native: &str, tmdb: Option<u64>, trailer: Option<&str>) -> ContentItem {
        ContentDraft::new(ContentProvider::Trakt, native, MediaType::Movie)
            .titles([Some("Movie".to_string())])
            .trailer_url(trailer.map(str::to_string))
            .tmdb(tmdb.map(|id| TmdbRef {
                id,
                media_type: MediaType::Movie,
            }))
            .build(&FixedPlaceholders::new("placeholder", "placeholder"))
    }

    fn tmdb_adapter(mock: MockHttpTransport) -> Arc<TmdbAdapter> {
        let client = RateLimitClient::new("TMDB", Arc::new(mock), RetryPolicy::no_retry());
        Arc::new(TmdbAdapter::new(
            client,
            "https://api.themoviedb.org/3",
            Some("k".to_string()),
            Arc::new(FixedPlaceholders::new("p", "b")),
        ))
    }

    fn inner_returning(items: Vec<ContentItem>) -> Arc<dyn ContentSource> {
        let mut inner = MockContentSource::new();
        inner.expect_provider().return_const(ContentProvider::Trakt);
        inner
            .expect_trending()
            .returning(move || Ok(items.clone()));
        Arc::new(inner)
    }

    #[tokio::test]
    async fn test_enriches_items_with_tmdb_reference() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().returning(|request| {
            let body = if request.url.ends_with("/movie/42/videos") {
                json!({"results": [{"key": "trailer42", "site": "YouTube", "type": "Trailer"}]})
            } else {
                json!({"id": 42, "poster_path": "/poster.jpg", "backdrop_path": "/back.jpg", "overview": "From TMDB"})
            };
            Ok(HttpResponse::json(200, &body))
        });

        let decorator = TmdbArtworkDecorator::new(
            inner_returning(vec![trakt_item("movie-1", Some(42), None)]),
            tmdb_adapter(mock),
        );
        let items = decorator.trending().await.unwrap();

        assert_eq!(items[0].poster, "https://image.tmdb.org/t/p/w342/poster.jpg");
        assert_eq!(items[0].backdrop, "https://image.tmdb.org/t/p/w1280/back.jpg");
        assert_eq!(items[0].synopsis, "From TMDB");
        assert_eq!(
            items[0].trailer_url.as_deref(),
            Some("https://www.youtube.com/watch?v=trailer42")
        );
        assert_eq!(decorator.provider(), ContentProvider::Trakt);
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_original_item() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .returning(|_| Ok(HttpResponse::new(404, "not found")));

        let original = trakt_item("movie-2", Some(7), Some("https://youtube.com/watch?v=x"));
        let decorator =
            TmdbArtworkDecorator::new(inner_returning(vec![original.clone()]), tmdb_adapter(mock));

        assert_eq!(decorator.trending().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn test_items_without_reference_are_not_looked_up() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().times(0);

        let original = trakt_item("movie-3", None, None);
        let decorator =
            TmdbArtworkDecorator::new(inner_returning(vec![original.clone()]), tmdb_adapter(mock));

        assert_eq!(decorator.trending().await.unwrap(), vec![original]);
    }
}
