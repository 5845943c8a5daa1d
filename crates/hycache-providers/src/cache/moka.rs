//! Moka local tier
//!
//! In-process cache of typed entries using Moka. Each entry expires after
//! the TTL it was stored with; capacity-based eviction is left to Moka.
//!
//! ## Example
//!
//! ```ignore
//! use hycache_providers::cache::MokaLocalCache;
//!
//! let local = MokaLocalCache::with_capacity(1000);
//! ```

use super::expiry::{PerEntryExpiry, Timed};
use crate::constants::LOCAL_CACHE_DEFAULT_MAX_ENTRIES;
use async_trait::async_trait;
use hycache_domain::error::Result;
use hycache_domain::ports::{LocalCache, LocalCacheEntry};
use moka::future::Cache;
use std::time::Duration;

/// Moka-based local tier
///
/// This is the out-of-box local tier and reports itself as the default
/// implementation to the backend eligibility gate.
#[derive(Clone)]
pub struct MokaLocalCache {
    cache: Cache<String, Timed<LocalCacheEntry>>,
    max_entries: u64,
}

impl Default for MokaLocalCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaLocalCache {
    /// Create a local tier with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(LOCAL_CACHE_DEFAULT_MAX_ENTRIES)
    }

    /// Create a local tier holding at most `max_entries` entries
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryExpiry)
            .build();

        Self { cache, max_entries }
    }

    /// Get the maximum number of entries
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Number of live entries
    pub async fn entry_count(&self) -> u64 {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl LocalCache for MokaLocalCache {
    async fn get(&self, key: &str) -> Result<Option<LocalCacheEntry>> {
        Ok(self.cache.get(key).await.map(|timed| timed.value))
    }

    async fn set(&self, key: &str, entry: LocalCacheEntry, expiration: Duration) -> Result<()> {
        self.cache
            .insert(key.to_string(), Timed::new(entry, expiration))
            .await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }

    fn is_default_implementation(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for MokaLocalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaLocalCache")
            .field("max_entries", &self.max_entries)
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
