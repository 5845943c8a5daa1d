//! Tests for the backend eligibility gate

use crate::test_utils::{RecordingDistributedCache, WrappedLocalCache, cache_with};
use hycache_application::{is_eligible, select_backend};
use hycache_domain::ports::{DistributedCache, LocalCache};
use hycache_domain::value_objects::HybridCacheOptions;
use hycache_providers::cache::{MemoryDistributedCache, MokaLocalCache};
use std::sync::Arc;

#[test]
fn test_default_pair_is_not_eligible() {
    let distributed = MemoryDistributedCache::new();
    let local = MokaLocalCache::new();
    assert!(!is_eligible(&distributed, &local));
    assert!(select_backend(Some(Arc::new(distributed)), &local).is_none());
}

#[test]
fn test_custom_distributed_tier_is_eligible() {
    let local = MokaLocalCache::new();
    let selected = select_backend(
        Some(Arc::new(RecordingDistributedCache::default())),
        &local,
    );
    assert_eq!(selected.expect("eligible").provider_name(), "recording");
}

#[test]
fn test_default_distributed_with_custom_local_is_eligible() {
    let local = WrappedLocalCache::default();
    assert!(!local.is_default_implementation());
    assert!(is_eligible(&MemoryDistributedCache::new(), &local));
}

#[test]
fn test_absent_distributed_tier_selects_nothing() {
    assert!(select_backend(None, &MokaLocalCache::new()).is_none());
}

#[test]
fn test_cache_reports_gated_backend() {
    let gated = cache_with(
        HybridCacheOptions::default(),
        Some(Arc::new(MemoryDistributedCache::new()) as Arc<dyn DistributedCache>),
    );
    assert!(gated.backend_cache().is_none());
    assert_eq!(gated.local_cache().provider_name(), "moka");

    let kept = cache_with(
        HybridCacheOptions::default(),
        Some(Arc::new(RecordingDistributedCache::default()) as Arc<dyn DistributedCache>),
    );
    assert_eq!(
        kept.backend_cache().expect("backend").provider_name(),
        "recording"
    );
}
