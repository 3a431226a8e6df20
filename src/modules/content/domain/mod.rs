pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{ContentDraft, ContentItem, ContentMeta, TmdbRef};
pub use services::{FixedPlaceholders, PlaceholderProvider, RandomPlaceholders, ScoreScale};
pub use value_objects::{ContentProvider, FeedKind, MediaType, Region};
