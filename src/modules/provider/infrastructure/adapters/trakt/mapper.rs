use std::sync::Arc;

use super::models::*;
use crate::modules::content::domain::services::normalization;
use crate::modules::content::{
    ContentDraft, ContentItem, ContentProvider, MediaType, PlaceholderProvider, ScoreScale,
    TmdbRef,
};

/// Trakt specific mapper implementation.
///
/// Trakt serves no artwork, so posters and backdrops always come from the
/// placeholder provider unless enrichment replaces them later.
#[derive(Clone)]
pub struct TraktMapper {
    placeholders: Arc<dyn PlaceholderProvider>,
}

impl TraktMapper {
    pub fn new(placeholders: Arc<dyn PlaceholderProvider>) -> Self {
        Self { placeholders }
    }

    /// Trakt id, else slug. Entries with neither cannot be identified.
    fn native_key(ids: &TraktIds) -> Option<String> {
        ids.trakt
            .map(|id| id.to_string())
            .or_else(|| ids.slug.clone().filter(|slug| !slug.is_empty()))
    }

    pub fn map_media(&self, media: TraktMedia, media_type: MediaType) -> Option<ContentItem> {
        let key = Self::native_key(&media.ids)?;
        let tmdb = media.ids.tmdb.map(|id| TmdbRef { id, media_type });

        Some(
            ContentDraft::new(
                ContentProvider::Trakt,
                format!("{}-{}", media_type, key),
                media_type,
            )
            .titles([media.title])
            .year(normalization::year_from_number(media.year))
            .score(media.rating, ScoreScale::TenPoint)
            .synopsis(media.overview)
            .trailer_url(media.trailer)
            .tmdb(tmdb)
            .build(self.placeholders.as_ref()),
        )
    }

    pub fn map_entries(&self, entries: Vec<TraktEntry>, media_type: MediaType) -> Vec<ContentItem> {
        entries
            .into_iter()
            .filter_map(|entry| self.map_media(entry.into_media(), media_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::FixedPlaceholders;
    use serde_json::json;

    fn mapper() -> TraktMapper {
        TraktMapper::new(Arc::new(FixedPlaceholders::new("p.jpg", "b.jpg")))
    }

    fn entries(value: serde_json::Value) -> Vec<TraktEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_wrapped_and_bare_entries_are_accepted() {
        let items = mapper().map_entries(
            entries(json!([
                {"watchers": 120, "movie": {"title": "Dune: Part Two", "year": 2024, "ids": {"trakt": 545, "tmdb": 693134}, "rating": 8.44}},
                {"title": "Oppenheimer", "year": 2023, "ids": {"trakt": 546}}
            ])),
            MediaType::Movie,
        );

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "west-trakt-movie-545");
        assert_eq!(items[0].rating, 8.4);
        assert_eq!(items[0].poster, "p.jpg");
        assert_eq!(
            items[0].meta.tmdb,
            Some(TmdbRef {
                id: 693134,
                media_type: MediaType::Movie
            })
        );
        assert_eq!(items[1].title, "Oppenheimer");
        assert_eq!(items[1].meta.tmdb, None);
    }

    #[test]
    fn test_show_entries() {
        let items = mapper().map_entries(
            entries(json!([{"watchers": 4, "show": {"title": "Shogun", "year": 2024, "ids": {"trakt": 1390, "slug": "shogun-2024"}, "trailer": "https://youtube.com/watch?v=yAV5aZ0unag"}}])),
            MediaType::Tv,
        );

        assert_eq!(items[0].id, "west-trakt-tv-1390");
        assert_eq!(items[0].media_type, MediaType::Tv);
        assert_eq!(
            items[0].trailer_url.as_deref(),
            Some("https://youtube.com/watch?v=yAV5aZ0unag")
        );
    }

    #[test]
    fn test_entries_without_ids_are_skipped() {
        let items = mapper().map_entries(
            entries(json!([{"title": "Ghost"}, {"title": "Slug", "ids": {"slug": "slug-only"}}])),
            MediaType::Movie,
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "west-trakt-movie-slug-only");
        assert_eq!(items[0].year, "—");
    }
}
