//! Hybrid cache builder

use super::hybrid_cache::HybridCache;
use crate::domain_services::serializer_registry::SerializerRegistryBuilder;
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::{CacheSerializer, DistributedCache, LocalCache, SerializerFactory};
use hycache_domain::value_objects::HybridCacheOptions;
use std::any::Any;
use std::sync::Arc;

/// Builder for [`HybridCache`]
///
/// # Example
///
/// ```ignore
/// let cache = HybridCache::builder()
///     .with_options(HybridCacheOptions::new().with_maximum_key_length(937))
///     .with_local_cache(Arc::new(MokaLocalCache::with_capacity(10_000)))
///     .with_serializer::<Customer, _>(CustomerSerializer)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct HybridCacheBuilder {
    options: HybridCacheOptions,
    local: Option<Arc<dyn LocalCache>>,
    distributed: Option<Arc<dyn DistributedCache>>,
    serializers: SerializerRegistryBuilder,
}

impl HybridCacheBuilder {
    /// Create a builder with default options and no tiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache-wide options
    pub fn with_options(mut self, options: HybridCacheOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the local tier (required)
    pub fn with_local_cache(mut self, local: Arc<dyn LocalCache>) -> Self {
        self.local = Some(local);
        self
    }

    /// Set the distributed tier; subject to the backend eligibility gate
    pub fn with_distributed_cache(mut self, distributed: Arc<dyn DistributedCache>) -> Self {
        self.distributed = Some(distributed);
        self
    }

    /// Register the serializer for `T`, replacing any earlier one
    pub fn with_serializer<T, S>(mut self, serializer: S) -> Self
    where
        T: Any,
        S: CacheSerializer<T> + 'static,
    {
        self.serializers = self.serializers.with_serializer::<T, S>(serializer);
        self
    }

    /// Append a serializer factory
    pub fn with_serializer_factory<F: SerializerFactory + 'static>(mut self, factory: F) -> Self {
        self.serializers = self.serializers.with_factory(factory);
        self
    }

    /// Build the cache
    pub fn build(self) -> Result<HybridCache> {
        let local = self
            .local
            .ok_or_else(|| Error::configuration("A local cache is required"))?;
        HybridCache::new(
            self.options,
            local,
            self.distributed,
            self.serializers.build(),
        )
    }
}
