use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Which list a feed request asks for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Trending,
    Upcoming,
    #[serde(rename = "top")]
    TopRated,
}

impl FeedKind {
    pub const ALL: [FeedKind; 3] = [FeedKind::Trending, FeedKind::Upcoming, FeedKind::TopRated];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Trending => "trending",
            FeedKind::Upcoming => "upcoming",
            FeedKind::TopRated => "top",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trending" => Ok(FeedKind::Trending),
            "upcoming" => Ok(FeedKind::Upcoming),
            "top" | "top-rated" | "top_rated" | "toprated" => Ok(FeedKind::TopRated),
            other => Err(AppError::InvalidInput(format!(
                "Unknown feed '{}', expected 'trending', 'upcoming' or 'top'",
                other
            ))),
        }
    }
}
