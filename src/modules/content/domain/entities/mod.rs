pub mod content_item;

pub use content_item::{ContentDraft, ContentItem, ContentMeta, TmdbRef};
