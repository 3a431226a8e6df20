pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::{TraktAdapter, TRAKT_API_VERSION};
pub use mapper::TraktMapper;
