use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Region;
use crate::shared::errors::AppError;

/// Supported external content providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentProvider {
    /// AniList GraphQL API
    #[serde(rename = "anilist")]
    AniList,
    /// Jikan (MyAnimeList) REST API
    #[serde(rename = "jikan")]
    Jikan,
    /// The Movie Database REST API
    #[serde(rename = "tmdb")]
    Tmdb,
    /// Trakt REST API
    #[serde(rename = "trakt")]
    Trakt,
}

impl ContentProvider {
    pub const ALL: [ContentProvider; 4] = [
        ContentProvider::AniList,
        ContentProvider::Jikan,
        ContentProvider::Tmdb,
        ContentProvider::Trakt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentProvider::AniList => "anilist",
            ContentProvider::Jikan => "jikan",
            ContentProvider::Tmdb => "tmdb",
            ContentProvider::Trakt => "trakt",
        }
    }

    /// Human readable name used in log lines
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentProvider::AniList => "AniList",
            ContentProvider::Jikan => "Jikan",
            ContentProvider::Tmdb => "TMDB",
            ContentProvider::Trakt => "Trakt",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            ContentProvider::AniList | ContentProvider::Jikan => Region::East,
            ContentProvider::Tmdb | ContentProvider::Trakt => Region::West,
        }
    }
}

impl fmt::Display for ContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentProvider::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown provider '{}'", s)))
    }
}
