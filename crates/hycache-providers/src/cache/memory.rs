//! In-memory distributed tier
//!
//! The out-of-box distributed tier: a byte store living in the same process.
//! Paired with the default local tier it only duplicates data, so the
//! backend eligibility gate ignores it in that combination.

use super::expiry::{PerEntryExpiry, Timed};
use crate::constants::MEMORY_DISTRIBUTED_DEFAULT_MAX_ENTRIES;
use async_trait::async_trait;
use hycache_domain::error::Result;
use hycache_domain::ports::{DistributedCache, DistributedEntryOptions};
use moka::future::Cache;
use std::sync::Arc;

/// In-process distributed tier storing payloads as-is
#[derive(Clone)]
pub struct MemoryDistributedCache {
    cache: Cache<String, Timed<Arc<[u8]>>>,
    max_entries: u64,
}

impl Default for MemoryDistributedCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDistributedCache {
    /// Create a store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_DISTRIBUTED_DEFAULT_MAX_ENTRIES)
    }

    /// Create a store holding at most `max_entries` payloads
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryExpiry)
            .build();

        Self { cache, max_entries }
    }

    /// Get the maximum number of payloads
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }
}

#[async_trait]
impl DistributedCache for MemoryDistributedCache {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cache.get(key).await.map(|timed| timed.value.to_vec()))
    }

    async fn set_bytes(
        &self,
        key: &str,
        value: &[u8],
        options: DistributedEntryOptions,
    ) -> Result<()> {
        self.cache
            .insert(key.to_string(), Timed::new(Arc::from(value), options.expiration))
            .await;
        Ok(())
    }

    async fn remove_bytes(&self, key: &str) -> Result<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }

    fn is_default_implementation(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for MemoryDistributedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDistributedCache")
            .field("max_entries", &self.max_entries)
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use hycache_application::ports::registry::{
    DISTRIBUTED_CACHE_PROVIDERS, DistributedCacheProviderConfig, DistributedCacheProviderEntry,
};

#[linkme::distributed_slice(DISTRIBUTED_CACHE_PROVIDERS)]
static MEMORY_PROVIDER: DistributedCacheProviderEntry = DistributedCacheProviderEntry {
    name: "memory",
    description: "In-process distributed cache (ignored alongside the default local cache)",
    factory: |config: &DistributedCacheProviderConfig| {
        let provider = match config.max_entries {
            Some(max_entries) => MemoryDistributedCache::with_capacity(max_entries),
            None => MemoryDistributedCache::new(),
        };
        Ok(Arc::new(provider))
    },
};
