use std::sync::Arc;

use super::models::*;
use crate::modules::content::domain::services::normalization;
use crate::modules::content::{
    ContentDraft, ContentItem, ContentProvider, MediaType, PlaceholderProvider, ScoreScale,
};

/// Jikan (MyAnimeList) specific mapper implementation
#[derive(Clone)]
pub struct JikanMapper {
    placeholders: Arc<dyn PlaceholderProvider>,
}

impl JikanMapper {
    pub fn new(placeholders: Arc<dyn PlaceholderProvider>) -> Self {
        Self { placeholders }
    }

    /// `year`, else the year of the first airing date
    fn extract_year(anime: &Anime) -> Option<String> {
        normalization::year_from_number(anime.year).or_else(|| {
            normalization::year_from_number(
                anime
                    .aired
                    .as_ref()
                    .and_then(|aired| aired.prop.as_ref())
                    .and_then(|prop| prop.from.as_ref())
                    .and_then(|from| from.year),
            )
        })
    }

    fn extract_trailer(trailer: Option<&Trailer>) -> Option<String> {
        let trailer = trailer?;
        trailer
            .youtube_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(normalization::youtube_watch_url)
            .or_else(|| trailer.url.clone())
    }

    pub fn map_anime(&self, anime: Anime) -> ContentItem {
        let year = Self::extract_year(&anime);
        let trailer_url = Self::extract_trailer(anime.trailer.as_ref());
        let jpg = anime.images.and_then(|images| images.jpg).unwrap_or_default();
        let backdrop = anime
            .trailer
            .and_then(|trailer| trailer.images)
            .and_then(|images| images.maximum_image_url);

        ContentDraft::new(ContentProvider::Jikan, anime.mal_id.to_string(), MediaType::Anime)
            .titles([anime.title_english, anime.title])
            .year(year)
            .score(anime.score, ScoreScale::TenPoint)
            .poster(normalization::first_non_empty([jpg.large_image_url, jpg.image_url]))
            .backdrop(backdrop)
            .synopsis(anime.synopsis)
            .trailer_url(trailer_url)
            .build(self.placeholders.as_ref())
    }

    pub fn map_anime_list(&self, anime: Vec<Anime>) -> Vec<ContentItem> {
        anime.into_iter().map(|a| self.map_anime(a)).collect()
    }
}
