use std::sync::Arc;

use super::models::*;
use crate::modules::content::domain::services::normalization;
use crate::modules::content::{
    ContentDraft, ContentItem, ContentProvider, MediaType, PlaceholderProvider, ScoreScale,
};

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// TMDB specific mapper implementation
#[derive(Clone)]
pub struct TmdbMapper {
    placeholders: Arc<dyn PlaceholderProvider>,
}

impl TmdbMapper {
    pub fn new(placeholders: Arc<dyn PlaceholderProvider>) -> Self {
        Self { placeholders }
    }

    pub fn poster_url(poster_path: Option<&str>) -> Option<String> {
        Self::image_url("w342", poster_path)
    }

    pub fn backdrop_url(backdrop_path: Option<&str>) -> Option<String> {
        Self::image_url("w1280", backdrop_path)
    }

    fn image_url(size: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/{}{}", IMAGE_BASE_URL, size, p))
    }

    /// Media type of a `/trending/all` entry; people and unknown kinds are `None`
    pub fn media_type_of(media: &TmdbMedia) -> Option<MediaType> {
        match media.media_type.as_deref() {
            Some("movie") => Some(MediaType::Movie),
            Some("tv") => Some(MediaType::Tv),
            _ => None,
        }
    }

    /// First YouTube trailer or teaser, else the first YouTube video
    pub fn pick_trailer(videos: &[TmdbVideo]) -> Option<String> {
        let youtube: Vec<&TmdbVideo> = videos
            .iter()
            .filter(|video| {
                video
                    .site
                    .as_deref()
                    .is_some_and(|site| site.eq_ignore_ascii_case("youtube"))
                    && video.key.as_deref().is_some_and(|key| !key.is_empty())
            })
            .collect();

        youtube
            .iter()
            .find(|video| matches!(video.video_type.as_deref(), Some("Trailer" | "Teaser")))
            .or_else(|| youtube.first())
            .and_then(|video| video.key.as_deref())
            .map(normalization::youtube_watch_url)
    }

    pub fn map_media(&self, media: TmdbMedia, media_type: MediaType) -> ContentItem {
        let date = match media_type {
            MediaType::Tv => media.first_air_date.as_deref().or(media.release_date.as_deref()),
            _ => media.release_date.as_deref().or(media.first_air_date.as_deref()),
        };
        let year = date.and_then(normalization::year_from_date);
        let poster = Self::poster_url(media.poster_path.as_deref());
        let backdrop = Self::backdrop_url(media.backdrop_path.as_deref());

        ContentDraft::new(
            ContentProvider::Tmdb,
            format!("{}-{}", media_type, media.id),
            media_type,
        )
        .titles([media.title, media.name])
        .year(year)
        .score(media.vote_average, ScoreScale::TenPoint)
        .poster(poster)
        .backdrop(backdrop)
        .synopsis(media.overview)
        .build(self.placeholders.as_ref())
    }

    pub fn map_media_list(&self, media: Vec<TmdbMedia>, media_type: MediaType) -> Vec<ContentItem> {
        media
            .into_iter()
            .map(|m| self.map_media(m, media_type))
            .collect()
    }

    /// Map a mixed `/trending/all` page, skipping non movie/tv entries
    pub fn map_trending(&self, media: Vec<TmdbMedia>) -> Vec<ContentItem> {
        media
            .into_iter()
            .filter_map(|m| Self::media_type_of(&m).map(|media_type| self.map_media(m, media_type)))
            .collect()
    }
}
