pub mod aggregation;

pub use aggregation::{recommend, WatchTowerAggregator, WatchTowerBoard, RECOMMENDED_LIMIT};
