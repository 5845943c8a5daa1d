//! Cache statistics
//!
//! Lock-free counters updated on every call, exposed as a point-in-time
//! snapshot.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of hybrid cache statistics
///
/// # Example
///
/// ```
/// use hycache_application::use_cases::HybridCacheStats;
///
/// let stats = HybridCacheStats::default();
/// assert_eq!(stats.local_hit_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridCacheStats {
    /// Values served from the local tier
    pub local_hits: u64,
    /// Local tier lookups that found nothing usable
    pub local_misses: u64,
    /// Values served from the distributed tier
    pub distributed_hits: u64,
    /// Distributed tier lookups that found nothing usable
    pub distributed_misses: u64,
    /// Factory invocations
    pub factory_invocations: u64,
    /// Callers that attached to an in-flight population
    pub stampede_joins: u64,
    /// Failed writes to the distributed tier
    pub distributed_write_failures: u64,
    /// Payloads skipped or discarded for exceeding the size limit
    pub oversized_payloads: u64,
}

impl HybridCacheStats {
    /// Fraction of local lookups that hit (0.0 to 1.0)
    #[allow(clippy::cast_precision_loss)]
    pub fn local_hit_rate(&self) -> f64 {
        let total = self.local_hits + self.local_misses;
        if total > 0 {
            self.local_hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    local_hits: AtomicU64,
    local_misses: AtomicU64,
    distributed_hits: AtomicU64,
    distributed_misses: AtomicU64,
    factory_invocations: AtomicU64,
    stampede_joins: AtomicU64,
    distributed_write_failures: AtomicU64,
    oversized_payloads: AtomicU64,
}

macro_rules! counter {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            pub(crate) fn $name(&self) {
                self.$field.fetch_add(1, Ordering::Relaxed);
            }
        )*
    };
}

impl StatsRecorder {
    counter! {
        local_hit => local_hits,
        local_miss => local_misses,
        distributed_hit => distributed_hits,
        distributed_miss => distributed_misses,
        factory_invocation => factory_invocations,
        stampede_join => stampede_joins,
        distributed_write_failure => distributed_write_failures,
        oversized_payload => oversized_payloads,
    }

    pub(crate) fn snapshot(&self) -> HybridCacheStats {
        HybridCacheStats {
            local_hits: self.local_hits.load(Ordering::Relaxed),
            local_misses: self.local_misses.load(Ordering::Relaxed),
            distributed_hits: self.distributed_hits.load(Ordering::Relaxed),
            distributed_misses: self.distributed_misses.load(Ordering::Relaxed),
            factory_invocations: self.factory_invocations.load(Ordering::Relaxed),
            stampede_joins: self.stampede_joins.load(Ordering::Relaxed),
            distributed_write_failures: self.distributed_write_failures.load(Ordering::Relaxed),
            oversized_payloads: self.oversized_payloads.load(Ordering::Relaxed),
        }
    }
}
