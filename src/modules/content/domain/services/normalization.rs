//! Field normalization rules shared by every source mapper

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown when a source has no usable date
pub const UNKNOWN_YEAR: &str = "—";

/// Title used when no candidate title is present
pub const UNTITLED: &str = "Untitled";

/// Native score scale of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScale {
    /// 0–10, used as-is (Jikan, TMDB, Trakt)
    TenPoint,
    /// 0–100, divided by 10 (AniList)
    HundredPoint,
}

/// Normalize a native score into `[0, 10]` with one decimal.
/// Missing or non-finite scores become 0.
pub fn normalize_rating(score: Option<f64>, scale: ScoreScale) -> f64 {
    let Some(raw) = score.filter(|s| s.is_finite()) else {
        return 0.0;
    };

    let ten_point = match scale {
        ScoreScale::TenPoint => raw,
        ScoreScale::HundredPoint => raw / 10.0,
    };

    round_one_decimal(ten_point.clamp(0.0, 10.0))
}

/// Nudge applied before rounding so 8.55 (stored as 8.5499999…) rounds up
const ROUNDING_EPSILON: f64 = 1e-9;

/// Round half-up to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    ((value * 10.0) + ROUNDING_EPSILON).round() / 10.0
}

/// First candidate that is present and not blank, trimmed
pub fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Year of an ISO date (`YYYY-MM-DD`); falls back to a leading 4-digit year
pub fn year_from_date(date: &str) -> Option<String> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed.year().to_string());
    }

    let prefix: String = date.chars().take(4).collect();
    if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(prefix)
    } else {
        None
    }
}

pub fn year_from_number(year: Option<i32>) -> Option<String> {
    year.filter(|y| *y > 0).map(|y| y.to_string())
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Turn an HTML-ish description into plain text: line breaks are kept, all
/// other tags are dropped.
pub fn strip_html(text: &str) -> String {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();

    let breaks = BREAKS.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"));

    let with_newlines = breaks.replace_all(text, "\n");
    tags.replace_all(&with_newlines, "").trim().to_string()
}
