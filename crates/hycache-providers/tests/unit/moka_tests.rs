//! Tests for the Moka local tier

use hycache_domain::ports::{LocalCache, LocalCacheEntry};
use hycache_providers::cache::MokaLocalCache;
use std::time::Duration;

#[tokio::test]
async fn test_set_then_get_returns_typed_value() {
    let local = MokaLocalCache::with_capacity(100);
    local
        .set("user:1", LocalCacheEntry::new("Ada".to_string()), Duration::from_secs(60))
        .await
        .expect("set");

    let entry = local.get("user:1").await.expect("get").expect("entry present");
    assert_eq!(entry.value::<String>(), Some("Ada".to_string()));
}

#[tokio::test]
async fn test_missing_key_is_none() {
    let local = MokaLocalCache::new();
    assert!(local.get("absent").await.expect("get").is_none());
}

#[tokio::test]
async fn test_entry_expires_after_its_own_ttl() {
    let local = MokaLocalCache::with_capacity(100);
    local
        .set("short", LocalCacheEntry::new(1_u32), Duration::from_millis(50))
        .await
        .expect("set");
    local
        .set("long", LocalCacheEntry::new(2_u32), Duration::from_secs(60))
        .await
        .expect("set");

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(local.get("short").await.expect("get").is_none());
    assert!(local.get("long").await.expect("get").is_some());
}

#[tokio::test]
async fn test_remove_deletes_entry() {
    let local = MokaLocalCache::with_capacity(100);
    local
        .set("k", LocalCacheEntry::new(5_u8), Duration::from_secs(60))
        .await
        .expect("set");
    local.remove("k").await.expect("remove");
    local.remove("never-set").await.expect("remove absent");

    assert!(local.get("k").await.expect("get").is_none());
    assert_eq!(local.entry_count().await, 0);
}

#[test]
fn test_reports_default_implementation() {
    let local = MokaLocalCache::new();
    assert!(local.is_default_implementation());
    assert_eq!(local.provider_name(), "moka");
}
