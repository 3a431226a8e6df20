pub mod anilist;
pub mod jikan;
pub mod tmdb;
pub mod trakt;

pub use anilist::AniListAdapter;
pub use jikan::JikanAdapter;
pub use tmdb::TmdbAdapter;
pub use trakt::TraktAdapter;
