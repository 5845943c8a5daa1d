//! Distributed Cache Provider Registry
//!
//! Providers register themselves into [`DISTRIBUTED_CACHE_PROVIDERS`] and are
//! resolved by name from configuration.

use hycache_domain::ports::DistributedCache;
use std::sync::Arc;

/// Configuration for distributed cache provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct DistributedCacheProviderConfig {
    /// Provider name (e.g., "memory", "redis")
    pub provider: String,
    /// Connection URI
    pub uri: Option<String>,
    /// Maximum number of entries, for in-process stores
    pub max_entries: Option<u64>,
    /// Namespace prefix for keys
    pub namespace: Option<String>,
    /// Largest payload the provider should hand back after decoding
    pub max_payload_bytes: Option<usize>,
    /// Payload size from which compression is attempted
    pub compression_threshold: Option<usize>,
}

impl DistributedCacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the maximum number of entries
    pub fn with_max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the maximum decoded payload size
    pub fn with_max_payload_bytes(mut self, bytes: usize) -> Self {
        self.max_payload_bytes = Some(bytes);
        self
    }

    /// Set the compression threshold
    pub fn with_compression_threshold(mut self, bytes: usize) -> Self {
        self.compression_threshold = Some(bytes);
        self
    }
}

/// Registry entry for distributed cache providers
pub struct DistributedCacheProviderEntry {
    /// Unique provider name (e.g., "memory", "redis")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&DistributedCacheProviderConfig) -> Result<Arc<dyn DistributedCache>, String>,
}

#[linkme::distributed_slice]
pub static DISTRIBUTED_CACHE_PROVIDERS: [DistributedCacheProviderEntry] = [..];

/// Resolve a distributed cache provider by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn DistributedCache>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_distributed_cache_provider(
    config: &DistributedCacheProviderConfig,
) -> Result<Arc<dyn DistributedCache>, String> {
    let provider_name = &config.provider;

    for entry in DISTRIBUTED_CACHE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = DISTRIBUTED_CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown distributed cache provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered distributed cache providers as (name, description)
pub fn list_distributed_cache_providers() -> Vec<(&'static str, &'static str)> {
    DISTRIBUTED_CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
