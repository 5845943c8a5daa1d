//! Distributed Tier Port
//!
//! Out-of-process, byte-oriented store shared between cache instances.
//! Payloads are opaque to the tier.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// How a payload should be stored by the distributed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributedEntryOptions {
    /// Time to live for the payload
    pub expiration: Duration,
    /// Whether the tier may compress the payload
    pub allow_compression: bool,
}

impl DistributedEntryOptions {
    /// Create options for the given TTL with compression permitted
    pub fn new(expiration: Duration) -> Self {
        Self {
            expiration,
            allow_compression: true,
        }
    }

    /// Set whether compression is permitted
    pub fn with_compression(mut self, allow: bool) -> Self {
        self.allow_compression = allow;
        self
    }
}

/// Distributed Tier Port
///
/// # Implementations
///
/// - **Memory**: the out-of-box in-process store (ignored by the cache when
///   paired with the default local tier)
/// - **Redis**: shared store for multi-instance deployments
#[async_trait]
pub trait DistributedCache: Send + Sync + fmt::Debug {
    /// Read a payload; `None` when absent or expired
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a payload with its TTL
    async fn set_bytes(&self, key: &str, value: &[u8], options: DistributedEntryOptions)
    -> Result<()>;

    /// Remove a payload; removing an absent key is not an error
    async fn remove_bytes(&self, key: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Marker for the out-of-box in-memory implementation
    ///
    /// Only that exact implementation returns `true`; anything customised,
    /// including a wrapper around the same storage, keeps the default.
    fn is_default_implementation(&self) -> bool {
        false
    }
}
