//! Options Model
//!
//! Merges per-call entry options over the cache-wide defaults. Unset fields
//! inherit the default, and the defaults fall back to baked-in values.

use hycache_domain::constants::DEFAULT_EXPIRATION;
use hycache_domain::ports::DistributedEntryOptions;
use hycache_domain::value_objects::{
    HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions,
};
use std::time::Duration;

/// Fully resolved options for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveEntryOptions {
    /// Distributed tier TTL
    pub expiration: Duration,
    /// Local tier TTL
    pub local_cache_expiration: Duration,
    /// Flags after per-call override and hard flags
    pub flags: HybridCacheEntryFlags,
}

impl EffectiveEntryOptions {
    /// Whether the local tier may be read
    pub fn local_read(&self) -> bool {
        !self
            .flags
            .contains(HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ)
    }

    /// Whether the local tier may be written; a zero TTL disables the write
    pub fn local_write(&self) -> bool {
        !self
            .flags
            .contains(HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_WRITE)
            && !self.local_cache_expiration.is_zero()
    }

    /// Whether the distributed tier may be read
    pub fn distributed_read(&self) -> bool {
        !self
            .flags
            .contains(HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE_READ)
    }

    /// Whether the distributed tier may be written; a zero TTL disables the write
    pub fn distributed_write(&self) -> bool {
        !self
            .flags
            .contains(HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE_WRITE)
            && !self.expiration.is_zero()
    }

    /// Whether the distributed tier may compress the payload
    pub fn allow_compression(&self) -> bool {
        !self.flags.contains(HybridCacheEntryFlags::DISABLE_COMPRESSION)
    }

    /// Write options handed to the distributed tier
    pub fn distributed_entry_options(&self) -> DistributedEntryOptions {
        DistributedEntryOptions::new(self.expiration).with_compression(self.allow_compression())
    }
}

/// Merge per-call options over the global defaults
///
/// Expiration falls back to the default expiration and then to
/// [`DEFAULT_EXPIRATION`]. Local expiration falls back to the default local
/// expiration and then to the *default* expiration, not the per-call one.
/// Per-call flags replace the default flags rather than combining with them.
pub fn merge(
    global: Option<&HybridCacheEntryOptions>,
    per_call: Option<&HybridCacheEntryOptions>,
) -> EffectiveEntryOptions {
    let default_expiration = global
        .and_then(|g| g.expiration)
        .unwrap_or(DEFAULT_EXPIRATION);
    let default_local_expiration = global
        .and_then(|g| g.local_cache_expiration)
        .unwrap_or(default_expiration);
    let default_flags = global.and_then(|g| g.flags).unwrap_or_default();

    EffectiveEntryOptions {
        expiration: per_call
            .and_then(|o| o.expiration)
            .unwrap_or(default_expiration),
        local_cache_expiration: per_call
            .and_then(|o| o.local_cache_expiration)
            .unwrap_or(default_local_expiration),
        flags: per_call.and_then(|o| o.flags).unwrap_or(default_flags),
    }
}

/// Options merge bound to one cache instance
///
/// Holds the configured defaults and the hard flags forced by the cache
/// setup, which are OR-ed into every merged result.
#[derive(Debug, Clone)]
pub struct EntryOptionsResolver {
    defaults: Option<HybridCacheEntryOptions>,
    hard_flags: HybridCacheEntryFlags,
}

impl EntryOptionsResolver {
    /// Bind the resolver to cache options and backend availability
    pub fn new(options: &HybridCacheOptions, has_backend: bool) -> Self {
        let mut hard_flags = HybridCacheEntryFlags::empty();
        if !has_backend {
            hard_flags |= HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE;
        }
        if options.disable_compression {
            hard_flags |= HybridCacheEntryFlags::DISABLE_COMPRESSION;
        }
        Self {
            defaults: options.default_entry_options.clone(),
            hard_flags,
        }
    }

    /// Flags applied to every call regardless of options
    pub fn hard_flags(&self) -> HybridCacheEntryFlags {
        self.hard_flags
    }

    /// Resolve the options for one call
    pub fn resolve(&self, per_call: Option<&HybridCacheEntryOptions>) -> EffectiveEntryOptions {
        let mut effective = merge(self.defaults.as_ref(), per_call);
        effective.flags |= self.hard_flags;
        effective
    }
}
