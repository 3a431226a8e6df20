// Unified content model produced by every source adapter
pub mod domain;

pub use domain::{
    ContentDraft, ContentItem, ContentMeta, ContentProvider, FeedKind, FixedPlaceholders,
    MediaType, PlaceholderProvider, RandomPlaceholders, Region, ScoreScale, TmdbRef,
};
