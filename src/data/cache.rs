//! Fetch Cache Module
//! Explicit time-bounded cache of fetched frames, keyed by source URL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use polars::prelude::DataFrame;

/// How long a fetched frame stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    df: DataFrame,
    fetched_at: Instant,
}

/// In-memory cache with manual invalidation. Entries past the TTL are
/// treated as absent; nothing is persisted.
pub struct FetchCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl FetchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Return the cached frame for `url` if it is still fresh.
    pub fn get(&self, url: &str) -> Option<&DataFrame> {
        self.entries
            .get(url)
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| &e.df)
    }

    pub fn insert(&mut self, url: &str, df: DataFrame) {
        self.entries.insert(
            url.to_string(),
            CacheEntry {
                df,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop the entry for `url`, forcing the next load to refetch.
    pub fn invalidate(&mut self, url: &str) {
        self.entries.remove(url);
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
