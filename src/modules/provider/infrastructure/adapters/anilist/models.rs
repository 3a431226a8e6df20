//! AniList GraphQL response models, limited to the fields the feeds read

use serde::{Deserialize, Serialize};

/// `data` of a `Page` query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AniListPageData {
    #[serde(rename = "Page")]
    pub page: AniListPage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AniListPage {
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub title: Option<MediaTitle>,
    pub description: Option<String>,
    pub start_date: Option<FuzzyDate>,
    pub average_score: Option<f64>,
    pub cover_image: Option<MediaCoverImage>,
    pub banner_image: Option<String>,
    pub trailer: Option<MediaTrailer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaCoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaTrailer {
    pub id: Option<String>,
    pub site: Option<String>,
}
