use crate::modules::content::{ContentItem, ContentProvider};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// One external catalogue able to produce the three WatchTower feeds
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Source this adapter speaks for
    fn provider(&self) -> ContentProvider;

    async fn trending(&self) -> AppResult<Vec<ContentItem>>;

    async fn upcoming(&self) -> AppResult<Vec<ContentItem>>;

    async fn top_rated(&self) -> AppResult<Vec<ContentItem>>;
}
