// Trakt v2 API models, limited to the fields the feeds read
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TraktIds {
    #[serde(default)]
    pub trakt: Option<u64>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub tmdb: Option<u64>,
}

/// A movie or show with `extended=full` fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TraktMedia {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub ids: TraktIds,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub trailer: Option<String>,
}

/// List entry. Trending lists wrap the media (`{"watchers": n, "movie": {..}}`),
/// popular lists return it bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraktEntry {
    Movie { movie: TraktMedia },
    Show { show: TraktMedia },
    Bare(TraktMedia),
}

impl TraktEntry {
    pub fn into_media(self) -> TraktMedia {
        match self {
            TraktEntry::Movie { movie } => movie,
            TraktEntry::Show { show } => show,
            TraktEntry::Bare(media) => media,
        }
    }
}
