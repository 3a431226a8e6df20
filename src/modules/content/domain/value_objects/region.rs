use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Partition of the content sources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Anime-focused sources (AniList, Jikan)
    East,
    /// Movie and TV sources (TMDB, Trakt)
    West,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::East => "east",
            Region::West => "west",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(Region::East),
            "west" => Ok(Region::West),
            other => Err(AppError::InvalidInput(format!(
                "Unknown region '{}', expected 'east' or 'west'",
                other
            ))),
        }
    }
}
