pub mod commands;
pub mod infrastructure;
pub mod traits;

pub use infrastructure::service::{WatchTowerAggregator, WatchTowerBoard};
pub use traits::ContentSource;
