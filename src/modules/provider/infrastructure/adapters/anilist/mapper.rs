use std::sync::Arc;

use super::models::*;
use crate::modules::content::domain::services::normalization;
use crate::modules::content::{
    ContentDraft, ContentItem, ContentProvider, MediaType, PlaceholderProvider, ScoreScale,
};

/// Maps AniList `Media` onto `ContentItem`
#[derive(Clone)]
pub struct AniListMapper {
    placeholders: Arc<dyn PlaceholderProvider>,
}

impl AniListMapper {
    pub fn new(placeholders: Arc<dyn PlaceholderProvider>) -> Self {
        Self { placeholders }
    }

    pub fn map_media(&self, media: Media) -> ContentItem {
        let title = media.title.unwrap_or_default();
        let cover = media.cover_image.unwrap_or_default();

        ContentDraft::new(ContentProvider::AniList, media.id.to_string(), MediaType::Anime)
            .titles([title.english, title.romaji, title.native])
            .year(normalization::year_from_number(
                media.start_date.and_then(|date| date.year),
            ))
            .score(media.average_score, ScoreScale::HundredPoint)
            .poster(normalization::first_non_empty([cover.extra_large, cover.large]))
            .backdrop(media.banner_image)
            .synopsis(media.description.as_deref().map(normalization::strip_html))
            .trailer_url(media.trailer.and_then(Self::youtube_trailer))
            .build(self.placeholders.as_ref())
    }

    pub fn map_media_list(&self, media: Vec<Media>) -> Vec<ContentItem> {
        media.into_iter().map(|m| self.map_media(m)).collect()
    }

    fn youtube_trailer(trailer: MediaTrailer) -> Option<String> {
        let is_youtube = trailer
            .site
            .as_deref()
            .is_some_and(|site| site.eq_ignore_ascii_case("youtube"));

        if is_youtube {
            trailer
                .id
                .filter(|id| !id.is_empty())
                .map(|id| normalization::youtube_watch_url(&id))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::{FixedPlaceholders, Region};
    use serde_json::json;

    fn mapper() -> AniListMapper {
        AniListMapper::new(Arc::new(FixedPlaceholders::new("p.jpg", "b.jpg")))
    }

    fn media(value: serde_json::Value) -> Media {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_media_mapping() {
        let item = mapper().map_media(media(json!({
            "id": 154587,
            "title": {"romaji": "Sousou no Frieren", "english": "Frieren: Beyond Journey's End", "native": "葬送のフリーレン"},
            "description": "The adventure is over.<br><br>But life goes on <i>for an elf</i>.",
            "startDate": {"year": 2023},
            "averageScore": 91,
            "coverImage": {"extraLarge": "https://img/xl.jpg", "large": "https://img/l.jpg"},
            "bannerImage": "https://img/banner.jpg",
            "trailer": {"id": "qgQ6RC5lJKg", "site": "youtube"}
        })));

        assert_eq!(item.id, "east-anilist-154587");
        assert_eq!(item.title, "Frieren: Beyond Journey's End");
        assert_eq!(item.year, "2023");
        assert_eq!(item.rating, 9.1);
        assert_eq!(item.poster, "https://img/xl.jpg");
        assert_eq!(item.backdrop, "https://img/banner.jpg");
        assert_eq!(item.media_type, MediaType::Anime);
        assert_eq!(item.region, Region::East);
        assert_eq!(item.synopsis, "The adventure is over.\n\nBut life goes on for an elf.");
        assert_eq!(
            item.trailer_url.as_deref(),
            Some("https://www.youtube.com/watch?v=qgQ6RC5lJKg")
        );
    }

    #[test]
    fn test_sparse_media_uses_fallbacks() {
        let item = mapper().map_media(media(json!({
            "id": 1,
            "title": {"romaji": "Romaji Only", "english": null},
            "coverImage": {"large": "https://img/l.jpg"},
            "trailer": {"id": "x1", "site": "dailymotion"}
        })));

        assert_eq!(item.title, "Romaji Only");
        assert_eq!(item.year, "—");
        assert_eq!(item.rating, 0.0);
        assert_eq!(item.poster, "https://img/l.jpg");
        assert_eq!(item.backdrop, "b.jpg");
        assert_eq!(item.synopsis, "");
        assert_eq!(item.trailer_url, None);
    }

    #[test]
    fn test_missing_titles_become_untitled() {
        let item = mapper().map_media(media(json!({"id": 2})));
        assert_eq!(item.title, "Untitled");
        assert_eq!(item.poster, "p.jpg");
    }
}
