//! Hybrid Cache Use Case
//!
//! Get-or-create orchestration over a local tier and an optional
//! distributed tier. Every caller consults the local tier; on a miss the
//! caller joins the stampede coordinator, and only the episode owner reads
//! the distributed tier, invokes the factory and writes the tiers back.
//!
//! Tier failures degrade to misses or skipped writes. Factory failures reach
//! every caller of the episode and are never cached.

use super::builder::HybridCacheBuilder;
use super::stats::{HybridCacheStats, StatsRecorder};
use crate::domain_services::backend_gate::select_backend;
use crate::domain_services::entry_options::{EffectiveEntryOptions, EntryOptionsResolver};
use crate::domain_services::serializer_registry::SerializerRegistry;
use crate::domain_services::stampede::StampedeCoordinator;
use futures::future;
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::{CacheSerializer, DistributedCache, LocalCache, LocalCacheEntry};
use hycache_domain::value_objects::{HybridCacheEntryOptions, HybridCacheOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Bounds every cached value type satisfies
///
/// Values are cloned out to each waiting caller and may cross task
/// boundaries, so they must be shareable and serializable.
pub trait CacheValue: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> CacheValue for T where T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

struct Inner {
    options: HybridCacheOptions,
    local: Arc<dyn LocalCache>,
    backend: Option<Arc<dyn DistributedCache>>,
    serializers: SerializerRegistry,
    resolver: EntryOptionsResolver,
    stampede: StampedeCoordinator,
    stats: StatsRecorder,
}

/// Multi-tier cache with stampede suppression
///
/// Cheap to clone; clones share tiers, serializers and the in-flight table.
#[derive(Clone)]
pub struct HybridCache {
    inner: Arc<Inner>,
}

impl HybridCache {
    /// Create a cache over the given tiers
    ///
    /// The options are validated and the distributed tier goes through the
    /// backend eligibility gate once, here.
    pub fn new(
        options: HybridCacheOptions,
        local: Arc<dyn LocalCache>,
        distributed: Option<Arc<dyn DistributedCache>>,
        serializers: SerializerRegistry,
    ) -> Result<Self> {
        options.validate()?;

        let backend = select_backend(distributed, local.as_ref());
        let resolver = EntryOptionsResolver::new(&options, backend.is_some());

        info!(
            local = local.provider_name(),
            distributed = ?backend.as_ref().map(|b| b.provider_name()),
            maximum_key_length = options.maximum_key_length,
            maximum_payload_bytes = options.maximum_payload_bytes,
            "Hybrid cache created"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                options,
                local,
                backend,
                serializers,
                resolver,
                stampede: StampedeCoordinator::new(),
                stats: StatsRecorder::default(),
            }),
        })
    }

    /// Start building a cache
    pub fn builder() -> HybridCacheBuilder {
        HybridCacheBuilder::new()
    }

    /// The options the cache was created with
    pub fn options(&self) -> &HybridCacheOptions {
        &self.inner.options
    }

    /// The active distributed tier, `None` when absent or rejected by the gate
    pub fn backend_cache(&self) -> Option<&Arc<dyn DistributedCache>> {
        self.inner.backend.as_ref()
    }

    /// The local tier
    pub fn local_cache(&self) -> &Arc<dyn LocalCache> {
        &self.inner.local
    }

    /// The serializer resolved for `T`
    pub fn get_serializer<T: CacheValue>(&self) -> Result<Arc<dyn CacheSerializer<T>>> {
        self.inner.serializers.resolve::<T>()
    }

    /// Snapshot of the cache counters
    pub fn stats(&self) -> HybridCacheStats {
        self.inner.stats.snapshot()
    }

    /// Number of population episodes currently in flight
    pub fn in_flight(&self) -> usize {
        self.inner.stampede.in_flight()
    }

    /// Get the value for `key`, producing it with `factory` on a miss
    ///
    /// Concurrent callers for the same key share one factory invocation.
    /// The factory's token fires when every waiting caller has gone away.
    pub async fn get_or_create<T, F, Fut>(
        &self,
        key: &str,
        factory: F,
        options: Option<&HybridCacheEntryOptions>,
    ) -> Result<T>
    where
        T: CacheValue,
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.get_or_create_cancellable(
            key,
            (),
            move |(), token| factory(token),
            options,
            &CancellationToken::new(),
        )
        .await
    }

    /// Get the value for `key`, passing `state` to the factory on a miss
    ///
    /// The state goes to the factory as an argument. When this caller joins
    /// an episode started by another caller, its state and factory are
    /// dropped unused.
    pub async fn get_or_create_with_state<S, T, F, Fut>(
        &self,
        key: &str,
        state: S,
        factory: F,
        options: Option<&HybridCacheEntryOptions>,
    ) -> Result<T>
    where
        S: Send + 'static,
        T: CacheValue,
        F: FnOnce(S, CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.get_or_create_cancellable(key, state, factory, options, &CancellationToken::new())
            .await
    }

    /// Stateful get-or-create with an explicit cancellation signal
    ///
    /// Cancelling `cancel` makes this caller return [`Error::Cancelled`] and
    /// release its interest. The population keeps running while any other
    /// caller still waits for it.
    pub async fn get_or_create_cancellable<S, T, F, Fut>(
        &self,
        key: &str,
        state: S,
        factory: F,
        options: Option<&HybridCacheEntryOptions>,
        cancel: &CancellationToken,
    ) -> Result<T>
    where
        S: Send + 'static,
        T: CacheValue,
        F: FnOnce(S, CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.validate_key(key)?;
        let effective = self.inner.resolver.resolve(options);
        let serializer = self.inner.serializers.resolve::<T>()?;

        if cancel.is_cancelled() {
            return Err(Error::cancelled(format!(
                "get-or-create for key '{key}' cancelled by caller"
            )));
        }

        if effective.local_read() {
            if let Some(value) = self.inner.read_local(key, serializer.as_ref()).await {
                return Ok(value);
            }
        }

        let inner = Arc::clone(&self.inner);
        let owned_key = key.to_string();
        let lease = self
            .inner
            .stampede
            .join::<T, _, _>(key, effective.flags, move |token| {
                inner.populate(owned_key, effective, serializer, state, factory, token)
            })?;
        if !lease.is_owner() {
            self.inner.stats.stampede_join();
        }

        lease.wait(cancel).await
    }

    /// Write a value to every permitted tier
    ///
    /// Bypasses the read path and the stampede coordinator. Every permitted
    /// tier is attempted; the first failure is returned afterwards.
    pub async fn set<T: CacheValue>(
        &self,
        key: &str,
        value: T,
        options: Option<&HybridCacheEntryOptions>,
    ) -> Result<()> {
        self.validate_key(key)?;
        let effective = self.inner.resolver.resolve(options);
        let serializer = self.inner.serializers.resolve::<T>()?;
        self.inner
            .write_tiers(key, &value, &effective, serializer.as_ref())
            .await
    }

    /// Remove a key from both tiers
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.validate_key(key)?;
        self.inner.remove_from_tiers(key).await
    }

    /// Remove a batch of keys from both tiers
    ///
    /// Every key is validated before any tier is touched. All removals are
    /// attempted; the first failure is returned.
    pub async fn remove_many<I, K>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        for key in &keys {
            self.validate_key(key.as_ref())?;
        }

        future::join_all(
            keys.iter()
                .map(|key| self.inner.remove_from_tiers(key.as_ref())),
        )
        .await
        .into_iter()
        .collect()
    }

    fn validate_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::validation("cache key cannot be empty"));
        }
        let maximum = self.inner.options.maximum_key_length;
        let length = key.chars().count();
        if length > maximum {
            return Err(Error::key_too_long(length, maximum));
        }
        Ok(())
    }
}

impl fmt::Debug for HybridCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridCache")
            .field("options", &self.inner.options)
            .field("local", &self.inner.local.provider_name())
            .field(
                "backend",
                &self.inner.backend.as_ref().map(|b| b.provider_name()),
            )
            .field("in_flight", &self.inner.stampede.in_flight())
            .finish_non_exhaustive()
    }
}

impl Inner {
    async fn populate<S, T, F, Fut>(
        self: Arc<Self>,
        key: String,
        effective: EffectiveEntryOptions,
        serializer: Arc<dyn CacheSerializer<T>>,
        state: S,
        factory: F,
        token: CancellationToken,
    ) -> Result<T>
    where
        T: CacheValue,
        F: FnOnce(S, CancellationToken) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(backend) = self.backend.as_ref().filter(|_| effective.distributed_read()) {
            if let Some((value, payload)) = self
                .read_distributed(backend.as_ref(), &key, serializer.as_ref())
                .await
            {
                if effective.local_write() {
                    let _ = self
                        .write_local(
                            &key,
                            value.clone(),
                            Some(payload),
                            effective.local_cache_expiration,
                        )
                        .await;
                }
                return Ok(value);
            }
        }

        self.stats.factory_invocation();
        debug!(key = %key, "Invoking factory");
        let value = factory(state, token).await?;

        if let Err(e) = self
            .write_tiers(&key, &value, &effective, serializer.as_ref())
            .await
        {
            debug!(key = %key, error = %e, "Write-back after population incomplete");
        }
        Ok(value)
    }

    async fn read_local<T: CacheValue>(
        &self,
        key: &str,
        serializer: &dyn CacheSerializer<T>,
    ) -> Option<T> {
        let entry = match self.local.get(key).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key, tier = "local", error = %e, "Cache read failed, treating as miss");
                None
            }
        };

        let value = entry.and_then(|entry| {
            entry.value::<T>().or_else(|| {
                let payload = entry.payload()?;
                serializer
                    .deserialize(payload)
                    .inspect_err(|e| {
                        warn!(key, tier = "local", error = %e, "Cached payload could not be decoded");
                    })
                    .ok()
            })
        });

        if value.is_some() {
            debug!(key, tier = "local", "Cache hit");
            self.stats.local_hit();
        } else {
            debug!(key, tier = "local", "Cache miss");
            self.stats.local_miss();
        }
        value
    }

    async fn read_distributed<T: CacheValue>(
        &self,
        backend: &dyn DistributedCache,
        key: &str,
        serializer: &dyn CacheSerializer<T>,
    ) -> Option<(T, Vec<u8>)> {
        let payload = match backend.get_bytes(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(key, tier = "distributed", "Cache miss");
                self.stats.distributed_miss();
                return None;
            }
            Err(e) => {
                warn!(key, tier = "distributed", error = %e, "Cache read failed, treating as miss");
                self.stats.distributed_miss();
                return None;
            }
        };

        if payload.len() > self.options.maximum_payload_bytes {
            warn!(
                key,
                tier = "distributed",
                bytes = payload.len(),
                maximum = self.options.maximum_payload_bytes,
                "Cached payload exceeds maximum size, treating as miss"
            );
            self.stats.oversized_payload();
            self.stats.distributed_miss();
            return None;
        }

        match serializer.deserialize(&payload) {
            Ok(value) => {
                debug!(key, tier = "distributed", bytes = payload.len(), "Cache hit");
                self.stats.distributed_hit();
                Some((value, payload))
            }
            Err(e) => {
                warn!(key, tier = "distributed", error = %e, "Cached payload could not be decoded, treating as miss");
                self.stats.distributed_miss();
                None
            }
        }
    }

    async fn write_tiers<T: CacheValue>(
        &self,
        key: &str,
        value: &T,
        effective: &EffectiveEntryOptions,
        serializer: &dyn CacheSerializer<T>,
    ) -> Result<()> {
        let mut first_error: Option<Error> = None;
        let mut payload = None;

        if let Some(backend) = self.backend.as_ref().filter(|_| effective.distributed_write()) {
            match serializer.serialize(value) {
                Ok(bytes) if bytes.len() > self.options.maximum_payload_bytes => {
                    warn!(
                        key,
                        bytes = bytes.len(),
                        maximum = self.options.maximum_payload_bytes,
                        "Payload exceeds maximum size, skipping distributed write"
                    );
                    self.stats.oversized_payload();
                    payload = Some(bytes);
                }
                Ok(bytes) => {
                    match backend
                        .set_bytes(key, &bytes, effective.distributed_entry_options())
                        .await
                    {
                        Ok(()) => {
                            debug!(key, tier = "distributed", bytes = bytes.len(), "Stored payload");
                        }
                        Err(e) => {
                            warn!(key, tier = "distributed", error = %e, "Cache write failed");
                            self.stats.distributed_write_failure();
                            first_error = first_error.or(Some(e));
                        }
                    }
                    payload = Some(bytes);
                }
                Err(e) => {
                    warn!(key, error = %e, "Value could not be serialized, skipping distributed write");
                    first_error = first_error.or(Some(e));
                }
            }
        }

        if effective.local_write() {
            if let Err(e) = self
                .write_local(key, value.clone(), payload, effective.local_cache_expiration)
                .await
            {
                first_error = first_error.or(Some(e));
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    async fn write_local<T: CacheValue>(
        &self,
        key: &str,
        value: T,
        payload: Option<Vec<u8>>,
        expiration: Duration,
    ) -> Result<()> {
        let mut entry = LocalCacheEntry::new(value);
        if let Some(payload) = payload {
            entry = entry.with_payload(payload);
        }
        self.local
            .set(key, entry, expiration)
            .await
            .inspect(|_| debug!(key, tier = "local", "Stored value"))
            .inspect_err(|e| warn!(key, tier = "local", error = %e, "Cache write failed"))
    }

    async fn remove_from_tiers(&self, key: &str) -> Result<()> {
        let local = async {
            self.local
                .remove(key)
                .await
                .inspect_err(|e| warn!(key, tier = "local", error = %e, "Cache remove failed"))
        };
        let distributed = async {
            match &self.backend {
                Some(backend) => backend.remove_bytes(key).await.inspect_err(
                    |e| warn!(key, tier = "distributed", error = %e, "Cache remove failed"),
                ),
                None => Ok(()),
            }
        };

        let (local, distributed) = future::join(local, distributed).await;
        debug!(key, "Removed from cache tiers");
        local.and(distributed)
    }
}
