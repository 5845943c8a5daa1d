//! Entry options
//!
//! Per-entry expiration and tier flags. Every field is optional: an unset
//! field inherits the global default when options are merged at call time.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::time::Duration;

bitflags! {
    /// Flags disabling reads, writes or compression for a single entry.
    ///
    /// Textual form (configuration files, env vars) is the `|`-separated list
    /// of flag names, e.g. `"DISABLE_LOCAL_CACHE_READ | DISABLE_COMPRESSION"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HybridCacheEntryFlags: u8 {
        /// Skip the local tier when reading
        const DISABLE_LOCAL_CACHE_READ = 0b0000_0001;
        /// Do not store the value in the local tier
        const DISABLE_LOCAL_CACHE_WRITE = 0b0000_0010;
        /// Skip the distributed tier when reading
        const DISABLE_DISTRIBUTED_CACHE_READ = 0b0000_0100;
        /// Do not store the value in the distributed tier
        const DISABLE_DISTRIBUTED_CACHE_WRITE = 0b0000_1000;
        /// Forbid payload compression in the distributed tier
        const DISABLE_COMPRESSION = 0b0001_0000;

        /// Local tier neither read nor written
        const DISABLE_LOCAL_CACHE = Self::DISABLE_LOCAL_CACHE_READ.bits()
            | Self::DISABLE_LOCAL_CACHE_WRITE.bits();
        /// Distributed tier neither read nor written
        const DISABLE_DISTRIBUTED_CACHE = Self::DISABLE_DISTRIBUTED_CACHE_READ.bits()
            | Self::DISABLE_DISTRIBUTED_CACHE_WRITE.bits();
    }
}

impl Default for HybridCacheEntryFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Options for a single cache entry
///
/// # Example
///
/// ```
/// use hycache_domain::value_objects::{HybridCacheEntryFlags, HybridCacheEntryOptions};
/// use std::time::Duration;
///
/// let options = HybridCacheEntryOptions::new()
///     .with_expiration(Duration::from_secs(120))
///     .with_flags(HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ);
/// assert!(options.local_cache_expiration.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridCacheEntryOptions {
    /// Overall lifetime; used as the distributed tier TTL
    #[serde(
        default,
        with = "super::duration_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<Duration>,

    /// Lifetime in the local tier
    #[serde(
        default,
        with = "super::duration_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_cache_expiration: Option<Duration>,

    /// Tier and compression flags; replaces the default flags when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<HybridCacheEntryFlags>,
}

impl HybridCacheEntryOptions {
    /// Create options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall expiration
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Set the local tier expiration
    pub fn with_local_cache_expiration(mut self, expiration: Duration) -> Self {
        self.local_cache_expiration = Some(expiration);
        self
    }

    /// Set the entry flags
    pub fn with_flags(mut self, flags: HybridCacheEntryFlags) -> Self {
        self.flags = Some(flags);
        self
    }
}
