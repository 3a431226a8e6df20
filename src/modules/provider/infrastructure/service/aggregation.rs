use futures::future::join_all;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::content::{ContentItem, FeedKind, Region};
use crate::modules::provider::traits::ContentSource;
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Size cap of the recommended feed
pub const RECOMMENDED_LIMIT: usize = 24;

/// All feeds of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchTowerBoard {
    pub trending: Vec<ContentItem>,
    pub upcoming: Vec<ContentItem>,
    pub top_rated: Vec<ContentItem>,
    pub recommended: Vec<ContentItem>,
}

/// Fans feed requests out to every source of a region.
///
/// Results are concatenated in source registration order. A failing source
/// is logged and contributes nothing; a feed request itself never fails.
#[derive(Clone, Default)]
pub struct WatchTowerAggregator {
    east: Vec<Arc<dyn ContentSource>>,
    west: Vec<Arc<dyn ContentSource>>,
}

impl WatchTowerAggregator {
    pub fn new(east: Vec<Arc<dyn ContentSource>>, west: Vec<Arc<dyn ContentSource>>) -> Self {
        Self { east, west }
    }

    pub fn sources(&self, region: Region) -> &[Arc<dyn ContentSource>] {
        match region {
            Region::East => &self.east,
            Region::West => &self.west,
        }
    }

    pub async fn feed(&self, region: Region, kind: FeedKind) -> Vec<ContentItem> {
        let sources = self.sources(region);
        let results = join_all(sources.iter().map(|source| Self::fetch(source.as_ref(), kind))).await;

        let mut items = Vec::new();
        let mut sources_ok = 0;
        for (source, result) in sources.iter().zip(results) {
            match result {
                Some(source_items) => {
                    sources_ok += 1;
                    items.extend(source_items);
                }
                None => debug!(
                    "Skipping {} in {}/{} feed",
                    source.provider().display_name(),
                    region,
                    kind
                ),
            }
        }

        LogContext::feed_assembled(region.as_str(), kind.as_str(), sources_ok, items.len());
        items
    }

    /// Every feed of `region` plus a recommended sample drawn from them
    pub async fn board(&self, region: Region) -> WatchTowerBoard {
        let (trending, upcoming, top_rated) = futures::join!(
            self.feed(region, FeedKind::Trending),
            self.feed(region, FeedKind::Upcoming),
            self.feed(region, FeedKind::TopRated),
        );

        let recommended = recommend(&[&trending, &upcoming, &top_rated], RECOMMENDED_LIMIT);

        WatchTowerBoard {
            trending,
            upcoming,
            top_rated,
            recommended,
        }
    }

    async fn fetch(source: &dyn ContentSource, kind: FeedKind) -> Option<Vec<ContentItem>> {
        let provider = source.provider();
        let timer = TimedOperation::new(provider.display_name(), kind.as_str());

        let result = match kind {
            FeedKind::Trending => source.trending().await,
            FeedKind::Upcoming => source.upcoming().await,
            FeedKind::TopRated => source.top_rated().await,
        };

        match result {
            Ok(items) => {
                timer.finish("ok");
                Some(items)
            }
            Err(e) => {
                timer.finish("failed");
                warn!(
                    "{} {} feed failed: {}",
                    provider.display_name(),
                    kind,
                    e
                );
                None
            }
        }
    }
}

/// Union of `feeds` without repeated ids, then a uniform sample of at most
/// `limit` items.
pub fn recommend(feeds: &[&Vec<ContentItem>], limit: usize) -> Vec<ContentItem> {
    let mut seen = HashSet::new();
    let pool: Vec<&ContentItem> = feeds
        .iter()
        .flat_map(|feed| feed.iter())
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    pool.choose_multiple(&mut rand::thread_rng(), limit)
        .map(|item| (*item).clone())
        .collect()
}
