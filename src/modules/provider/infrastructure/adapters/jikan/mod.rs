pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::{JikanAdapter, JIKAN_REQUESTS_PER_SECOND};
pub use mapper::JikanMapper;
