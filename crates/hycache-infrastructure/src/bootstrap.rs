//! Cache Bootstrap
//!
//! Composition root turning [`AppConfig`] into a ready [`HybridCache`].
//!
//! ```text
//! AppConfig → local tier (moka)        ─┐
//!           → registry → distributed tier ─┼→ HybridCache
//!           → cache options             ─┘
//! ```
//!
//! Distributed tiers are resolved by name through the linkme registry, so
//! any provider linked into the binary can be selected from configuration.

use crate::config::AppConfig;
use crate::config::types::DistributedTierConfig;
use hycache_application::HybridCache;
use hycache_application::ports::registry::{
    DistributedCacheProviderConfig, resolve_distributed_cache_provider,
};
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::DistributedCache;
use hycache_providers::cache::MokaLocalCache;
use std::sync::Arc;
use tracing::info;

/// Build a hybrid cache from configuration
pub fn build_hybrid_cache(config: &AppConfig) -> Result<HybridCache> {
    let local = Arc::new(MokaLocalCache::with_capacity(config.local.max_entries));

    let mut builder = HybridCache::builder()
        .with_options(config.cache.clone())
        .with_local_cache(local);
    if let Some(distributed) =
        resolve_distributed_cache(&config.distributed, config.cache.maximum_payload_bytes)?
    {
        builder = builder.with_distributed_cache(distributed);
    }

    let cache = builder.build()?;
    info!(
        local_max_entries = config.local.max_entries,
        distributed = ?cache.backend_cache().map(|b| b.provider_name()),
        "Hybrid cache bootstrapped"
    );
    Ok(cache)
}

/// Resolve the configured distributed tier, `None` when disabled
///
/// `maximum_payload_bytes` bounds what a provider may inflate a stored
/// payload to before handing it back.
pub fn resolve_distributed_cache(
    config: &DistributedTierConfig,
    maximum_payload_bytes: usize,
) -> Result<Option<Arc<dyn DistributedCache>>> {
    if !config.enabled {
        return Ok(None);
    }

    let mut registry_config = DistributedCacheProviderConfig::new(config.provider.clone())
        .with_max_payload_bytes(maximum_payload_bytes);
    if let Some(uri) = &config.uri {
        registry_config = registry_config.with_uri(uri.clone());
    }
    if let Some(namespace) = &config.namespace {
        registry_config = registry_config.with_namespace(namespace.clone());
    }
    if let Some(max_entries) = config.max_entries {
        registry_config = registry_config.with_max_entries(max_entries);
    }
    if let Some(threshold) = config.compression_threshold_bytes {
        registry_config = registry_config.with_compression_threshold(threshold);
    }

    let provider = resolve_distributed_cache_provider(&registry_config).map_err(|message| {
        Error::configuration(format!(
            "Failed to resolve distributed cache provider '{}': {message}",
            config.provider
        ))
    })?;
    info!(provider = provider.provider_name(), "Resolved distributed cache provider");
    Ok(Some(provider))
}
