pub mod content_provider;
pub mod feed_kind;
pub mod media_type;
pub mod region;

pub use content_provider::ContentProvider;
pub use feed_kind::FeedKind;
pub use media_type::MediaType;
pub use region::Region;
