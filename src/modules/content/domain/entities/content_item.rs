use serde::{Deserialize, Serialize};

use crate::modules::content::domain::{
    services::{
        normalization::{self, ScoreScale, UNKNOWN_YEAR, UNTITLED},
        PlaceholderProvider,
    },
    value_objects::{ContentProvider, MediaType, Region},
};

/// TMDB identity of an item known by another source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmdbRef {
    pub id: u64,
    pub media_type: MediaType,
}

/// Provenance of an item. Debugging and cache keys only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    pub source: ContentProvider,
    pub native_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<TmdbRef>,
}

/// Normalized record for one anime, movie or show, whatever its source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// `{region}-{source}-{nativeId}`
    pub id: String,
    pub title: String,
    pub year: String,
    /// 0–10, one decimal
    pub rating: f64,
    pub poster: String,
    pub backdrop: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub region: Region,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    #[serde(rename = "_meta")]
    pub meta: ContentMeta,
}

// `_meta` is provenance, not identity
impl PartialEq for ContentItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.year == other.year
            && self.rating == other.rating
            && self.poster == other.poster
            && self.backdrop == other.backdrop
            && self.media_type == other.media_type
            && self.region == other.region
            && self.synopsis == other.synopsis
            && self.trailer_url == other.trailer_url
    }
}

impl ContentItem {
    pub fn build_id(provider: ContentProvider, native_id: &str) -> String {
        format!("{}-{}-{}", provider.region(), provider, native_id)
    }

    pub fn source(&self) -> ContentProvider {
        self.meta.source
    }
}

/// Raw, source-agnostic field values collected by a mapper.
///
/// `build` applies every normalization rule, so all adapters produce
/// `ContentItem`s with the same guarantees.
#[derive(Debug, Clone)]
pub struct ContentDraft {
    provider: ContentProvider,
    native_id: String,
    media_type: MediaType,
    titles: Vec<Option<String>>,
    year: Option<String>,
    score: Option<f64>,
    score_scale: ScoreScale,
    poster: Option<String>,
    backdrop: Option<String>,
    synopsis: Option<String>,
    trailer_url: Option<String>,
    tmdb: Option<TmdbRef>,
}

impl ContentDraft {
    pub fn new(provider: ContentProvider, native_id: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            provider,
            native_id: native_id.into(),
            media_type,
            titles: Vec::new(),
            year: None,
            score: None,
            score_scale: ScoreScale::TenPoint,
            poster: None,
            backdrop: None,
            synopsis: None,
            trailer_url: None,
            tmdb: None,
        }
    }

    /// Candidate titles in priority order
    pub fn titles<I>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.titles = titles.into_iter().collect();
        self
    }

    pub fn year(mut self, year: Option<String>) -> Self {
        self.year = year;
        self
    }

    pub fn score(mut self, score: Option<f64>, scale: ScoreScale) -> Self {
        self.score = score;
        self.score_scale = scale;
        self
    }

    pub fn poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }

    pub fn backdrop(mut self, backdrop: Option<String>) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn synopsis(mut self, synopsis: Option<String>) -> Self {
        self.synopsis = synopsis;
        self
    }

    pub fn trailer_url(mut self, trailer_url: Option<String>) -> Self {
        self.trailer_url = trailer_url;
        self
    }

    pub fn tmdb(mut self, tmdb: Option<TmdbRef>) -> Self {
        self.tmdb = tmdb;
        self
    }

    pub fn build(self, placeholders: &dyn PlaceholderProvider) -> ContentItem {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        ContentItem {
            id: ContentItem::build_id(self.provider, &self.native_id),
            title: normalization::first_non_empty(self.titles)
                .unwrap_or_else(|| UNTITLED.to_string()),
            year: present(self.year).unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            rating: normalization::normalize_rating(self.score, self.score_scale),
            poster: present(self.poster).unwrap_or_else(|| placeholders.poster()),
            backdrop: present(self.backdrop).unwrap_or_else(|| placeholders.backdrop()),
            media_type: self.media_type,
            region: self.provider.region(),
            synopsis: self.synopsis.unwrap_or_default(),
            trailer_url: present(self.trailer_url),
            meta: ContentMeta {
                source: self.provider,
                native_id: self.native_id,
                tmdb: self.tmdb,
            },
        }
    }
}
