//! AniList GraphQL queries

/// One page of anime media. `$statusNotIn` is only sent for the upcoming
/// feed; AniList ignores arguments bound to absent variables.
pub const MEDIA_PAGE_QUERY: &str = r#"
query ($page: Int, $perPage: Int, $sort: [MediaSort], $statusNotIn: [MediaStatus]) {
  Page(page: $page, perPage: $perPage) {
    media(type: ANIME, sort: $sort, status_not_in: $statusNotIn, isAdult: false) {
      id
      title {
        romaji
        english
        native
      }
      description(asHtml: false)
      startDate {
        year
      }
      averageScore
      coverImage {
        extraLarge
        large
      }
      bannerImage
      trailer {
        id
        site
      }
    }
  }
}
"#;

pub const SORT_TRENDING: &str = "TRENDING_DESC";
pub const SORT_SCORE: &str = "SCORE_DESC";
pub const SORT_START_DATE: &str = "START_DATE";

/// Statuses excluded from the upcoming feed
pub const UPCOMING_EXCLUDED_STATUSES: [&str; 2] = ["FINISHED", "CANCELLED"];

pub const PER_PAGE: u32 = 20;
