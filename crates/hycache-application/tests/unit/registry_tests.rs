//! Tests for the distributed cache provider registry

use hycache_application::ports::registry::{
    DistributedCacheProviderConfig, list_distributed_cache_providers,
    resolve_distributed_cache_provider,
};

#[test]
fn test_memory_provider_is_registered() {
    let providers = list_distributed_cache_providers();
    assert!(providers.iter().any(|(name, _)| *name == "memory"));
}

#[test]
fn test_resolve_memory_provider() {
    let provider = resolve_distributed_cache_provider(
        &DistributedCacheProviderConfig::new("memory").with_max_entries(10),
    )
    .expect("memory provider");
    assert_eq!(provider.provider_name(), "memory");
    assert!(provider.is_default_implementation());
}

#[test]
fn test_unknown_provider_lists_available() {
    let err = resolve_distributed_cache_provider(&DistributedCacheProviderConfig::new("nope"))
        .err()
        .expect("unknown provider");
    assert!(err.contains("nope"));
    assert!(err.contains("memory"));
}
