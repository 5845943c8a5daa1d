//! Tests for entry options merge and hard flags

use hycache_application::{EntryOptionsResolver, merge};
use hycache_domain::constants::DEFAULT_EXPIRATION;
use hycache_domain::value_objects::{
    HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions,
};
use std::time::Duration;

#[test]
fn test_flags_only_per_call_keeps_default_expiration() {
    let global = HybridCacheEntryOptions::new().with_expiration(Duration::from_secs(120));
    let per_call =
        HybridCacheEntryOptions::new().with_flags(HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ);

    let effective = merge(Some(&global), Some(&per_call));
    assert_eq!(effective.expiration, Duration::from_secs(120));
    assert_eq!(effective.local_cache_expiration, Duration::from_secs(120));
    assert_eq!(effective.flags, HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ);
}

#[test]
fn test_per_call_flags_replace_default_flags() {
    let global =
        HybridCacheEntryOptions::new().with_flags(HybridCacheEntryFlags::DISABLE_COMPRESSION);
    let per_call = HybridCacheEntryOptions::new()
        .with_flags(HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE_WRITE);

    let effective = merge(Some(&global), Some(&per_call));
    assert_eq!(
        effective.flags,
        HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE_WRITE
    );
    assert!(effective.allow_compression());

    let inherited = merge(Some(&global), Some(&HybridCacheEntryOptions::new()));
    assert!(!inherited.allow_compression());
}

#[test]
fn test_default_local_expiration_is_used_before_default_expiration() {
    let global = HybridCacheEntryOptions::new()
        .with_expiration(Duration::from_secs(600))
        .with_local_cache_expiration(Duration::from_secs(30));

    let effective = merge(Some(&global), None);
    assert_eq!(effective.expiration, Duration::from_secs(600));
    assert_eq!(effective.local_cache_expiration, Duration::from_secs(30));
}

#[test]
fn test_per_call_local_expiration_wins() {
    let global = HybridCacheEntryOptions::new().with_local_cache_expiration(Duration::from_secs(30));
    let per_call =
        HybridCacheEntryOptions::new().with_local_cache_expiration(Duration::from_secs(5));

    let effective = merge(Some(&global), Some(&per_call));
    assert_eq!(effective.expiration, DEFAULT_EXPIRATION);
    assert_eq!(effective.local_cache_expiration, Duration::from_secs(5));
}

#[test]
fn test_missing_backend_forces_distributed_flags() {
    let resolver = EntryOptionsResolver::new(&HybridCacheOptions::default(), false);
    assert!(
        resolver
            .hard_flags()
            .contains(HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE)
    );

    let effective = resolver.resolve(Some(&HybridCacheEntryOptions::new().with_flags(
        HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ,
    )));
    assert!(!effective.distributed_read());
    assert!(!effective.distributed_write());
    assert!(!effective.local_read());
    assert!(effective.local_write());
}

#[test]
fn test_global_compression_switch_cannot_be_overridden() {
    let resolver =
        EntryOptionsResolver::new(&HybridCacheOptions::new().with_compression_disabled(), true);

    let effective = resolver.resolve(Some(
        &HybridCacheEntryOptions::new().with_flags(HybridCacheEntryFlags::empty()),
    ));
    assert!(!effective.allow_compression());
    assert!(!effective.distributed_entry_options().allow_compression);
    assert!(effective.distributed_read());
}

#[test]
fn test_resolver_uses_configured_defaults() {
    let options = HybridCacheOptions::new().with_default_entry_options(
        HybridCacheEntryOptions::new().with_expiration(Duration::from_secs(90)),
    );
    let resolver = EntryOptionsResolver::new(&options, true);

    let effective = resolver.resolve(None);
    assert_eq!(effective.expiration, Duration::from_secs(90));
    assert_eq!(
        effective.distributed_entry_options().expiration,
        Duration::from_secs(90)
    );
    assert!(resolver.hard_flags().is_empty());
}
