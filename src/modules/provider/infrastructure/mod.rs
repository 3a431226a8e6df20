pub mod adapters;
pub mod cache;
pub mod decorators;
pub mod http_client;
pub mod service;

// Re-export commonly used types
pub use adapters::{AniListAdapter, JikanAdapter, TmdbAdapter, TraktAdapter};
pub use cache::{InMemoryQueryCache, QueryCache};
pub use decorators::TmdbArtworkDecorator;
pub use http_client::{
    HttpRequest, HttpResponse, HttpTransport, RateLimitClient, ReqwestTransport, RetryPolicy,
};
pub use service::{WatchTowerAggregator, WatchTowerBoard};
