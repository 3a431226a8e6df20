use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Memo store for GraphQL responses, keyed by the exact query and variables.
///
/// Entries never expire: the cache lives as long as the adapter that owns it.
pub trait QueryCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: String, value: Value);
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

/// Concurrent in-process `QueryCache`
#[derive(Debug, Default)]
pub struct InMemoryQueryCache {
    entries: DashMap<String, Value>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> QueryCacheStats {
        QueryCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }
}

impl QueryCache for InMemoryQueryCache {
    fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Query cache hit ({} bytes key)", key.len());
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn set(&self, key: String, value: Value) {
        self.entries.insert(key, value);
    }
}
