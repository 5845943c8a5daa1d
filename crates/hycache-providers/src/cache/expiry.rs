//! Per-entry expiration for moka caches

use moka::Expiry;
use std::time::{Duration, Instant};

/// A cached value carrying its own time to live
#[derive(Debug, Clone)]
pub(crate) struct Timed<V> {
    pub(crate) value: V,
    pub(crate) ttl: Duration,
}

impl<V> Timed<V> {
    pub(crate) fn new(value: V, ttl: Duration) -> Self {
        Self { value, ttl }
    }
}

/// Expires every entry after its own TTL, restarting it on overwrite
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PerEntryExpiry;

impl<K, V> Expiry<K, Timed<V>> for PerEntryExpiry {
    fn expire_after_create(&self, _key: &K, value: &Timed<V>, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        value: &Timed<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}
