// Jikan v4 API models, limited to the fields the feeds read
// Based on https://docs.api.jikan.moe/

use serde::{Deserialize, Serialize};

// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

pub type MalId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<ImageUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Trailer {
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<TrailerImages>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrailerImages {
    #[serde(default)]
    pub maximum_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Aired {
    #[serde(default)]
    pub from: Option<String>, // ISO8601 UTC
    #[serde(default)]
    pub prop: Option<AiredProp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AiredProp {
    #[serde(default)]
    pub from: Option<DateProp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DateProp {
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: MalId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub trailer: Option<Trailer>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub aired: Option<Aired>,
    #[serde(default)]
    pub synopsis: Option<String>,
}
