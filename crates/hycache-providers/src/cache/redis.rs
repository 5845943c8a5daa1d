//! Redis distributed tier
//!
//! Distributed tier backed by Redis, shared between cache instances.
//! Payloads are framed by [`PayloadCompressor`] and compressed when the
//! entry permits it.
//!
//! ## Example
//!
//! ```ignore
//! use hycache_providers::cache::RedisDistributedCache;
//!
//! let provider = RedisDistributedCache::new("redis://localhost:6379")?;
//! // Or with host/port
//! let provider = RedisDistributedCache::with_host_port("localhost", 6379)?;
//! ```

use super::compression::PayloadCompressor;
use crate::constants::{
    CACHE_NAMESPACE_SEPARATOR, COMPRESSION_THRESHOLD_BYTES, REDIS_DEFAULT_URI,
};
use async_trait::async_trait;
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::{DistributedCache, DistributedEntryOptions};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Redis distributed tier
///
/// Connects lazily on first use and shares one managed, auto-reconnecting
/// connection between calls.
#[derive(Clone)]
pub struct RedisDistributedCache {
    client: Client,
    connection: Arc<OnceCell<ConnectionManager>>,
    namespace: Option<String>,
    compressor: PayloadCompressor,
}

impl RedisDistributedCache {
    /// Create a Redis tier from a connection URL
    ///
    /// Only the URL is validated here; no connection is made until the first
    /// operation.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::infrastructure_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
            namespace: None,
            compressor: PayloadCompressor::default(),
        })
    }

    /// Create a Redis tier with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Prefix every key with `namespace`
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Use a custom compressor
    pub fn with_compressor(mut self, compressor: PayloadCompressor) -> Self {
        self.compressor = compressor;
        self
    }

    /// The payload compressor in use
    pub fn compressor(&self) -> &PayloadCompressor {
        &self.compressor
    }

    /// The key as stored in Redis
    pub fn storage_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}{CACHE_NAMESPACE_SEPARATOR}{key}"),
            None => key.to_string(),
        }
    }

    async fn get_connection(&self) -> Result<ConnectionManager> {
        self.connection
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await
            .cloned()
            .map_err(|e| {
                Error::infrastructure_with_source(format!("Failed to get Redis connection: {e}"), e)
            })
    }
}

#[async_trait]
impl DistributedCache for RedisDistributedCache {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.get_connection().await?;
        let storage_key = self.storage_key(key);

        let stored = conn
            .get::<_, Option<Vec<u8>>>(&storage_key)
            .await
            .map_err(|e| Error::infrastructure_with_source(format!("Redis GET failed: {e}"), e))?;

        stored
            .map(|stored| self.compressor.decode(&stored))
            .transpose()
    }

    async fn set_bytes(
        &self,
        key: &str,
        value: &[u8],
        options: DistributedEntryOptions,
    ) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let storage_key = self.storage_key(key);
        let stored = self.compressor.encode(value, options.allow_compression)?;
        let ttl_millis = u64::try_from(options.expiration.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);

        let result: redis::RedisResult<()> = redis::cmd("SET")
            .arg(&storage_key)
            .arg(stored.as_slice())
            .arg("PX")
            .arg(ttl_millis)
            .query_async(&mut conn)
            .await;
        result.map_err(|e| Error::infrastructure_with_source(format!("Redis SET failed: {e}"), e))?;

        debug!(
            key = %storage_key,
            bytes = value.len(),
            stored_bytes = stored.len(),
            "Stored payload in Redis"
        );
        Ok(())
    }

    async fn remove_bytes(&self, key: &str) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let deleted: redis::RedisResult<i64> = conn.del(self.storage_key(key)).await;
        deleted
            .map(|_| ())
            .map_err(|e| Error::infrastructure_with_source(format!("Redis DEL failed: {e}"), e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisDistributedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisDistributedCache")
            .field("namespace", &self.namespace)
            .field("connected", &self.connection.initialized())
            .field("compressor", &self.compressor)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use hycache_application::ports::registry::{
    DISTRIBUTED_CACHE_PROVIDERS, DistributedCacheProviderConfig, DistributedCacheProviderEntry,
};

/// Factory function for creating Redis distributed tier instances.
fn redis_cache_factory(
    config: &DistributedCacheProviderConfig,
) -> std::result::Result<Arc<dyn DistributedCache>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let mut provider = RedisDistributedCache::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;
    if let Some(namespace) = &config.namespace {
        provider = provider.with_namespace(namespace.clone());
    }

    let mut compressor = PayloadCompressor::new(
        config
            .compression_threshold
            .unwrap_or(COMPRESSION_THRESHOLD_BYTES),
    );
    if let Some(max_payload_bytes) = config.max_payload_bytes {
        compressor = compressor.with_max_decoded_bytes(max_payload_bytes);
    }
    provider = provider.with_compressor(compressor);

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(DISTRIBUTED_CACHE_PROVIDERS)]
static REDIS_PROVIDER: DistributedCacheProviderEntry = DistributedCacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
