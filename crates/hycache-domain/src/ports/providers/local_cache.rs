//! Local Tier Port
//!
//! In-process entry cache consulted before anything else. Entries keep the
//! already-deserialized value so a local hit never pays for deserialization.
//! Eviction policy belongs entirely to the implementation.

use crate::error::Result;
use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A value held by the local tier
///
/// Carries the typed value and, when one was produced on the way in, the
/// serialized payload. The payload lets a caller asking for a different
/// type under the same key still decode the entry.
#[derive(Clone)]
pub struct LocalCacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    payload: Option<Arc<[u8]>>,
}

impl LocalCacheEntry {
    /// Create an entry holding a typed value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            payload: None,
        }
    }

    /// Attach the serialized form of the value
    pub fn with_payload<P: Into<Arc<[u8]>>>(mut self, payload: P) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Clone the typed value out if the entry holds a `T`
    pub fn value<T: Any + Clone>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }

    /// Whether the entry holds a `T`
    pub fn holds<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// The serialized payload, when one is attached
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

impl fmt::Debug for LocalCacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalCacheEntry")
            .field("payload_len", &self.payload.as_ref().map(|p| p.len()))
            .finish_non_exhaustive()
    }
}

/// Local Tier Port
///
/// Implementations are already thread-safe; the orchestrator issues calls
/// without imposing its own locking.
#[async_trait]
pub trait LocalCache: Send + Sync + fmt::Debug {
    /// Look up an entry; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<LocalCacheEntry>>;

    /// Store an entry for `expiration`, replacing any previous one
    async fn set(&self, key: &str, entry: LocalCacheEntry, expiration: Duration) -> Result<()>;

    /// Remove an entry; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Marker for the out-of-box local tier
    ///
    /// Only the stock implementation returns `true`. Wrappers and custom
    /// implementations keep the default, even when they delegate to it.
    fn is_default_implementation(&self) -> bool {
        false
    }
}
