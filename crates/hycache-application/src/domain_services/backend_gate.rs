//! Backend Eligibility Gate
//!
//! Decides once, at construction, whether the supplied distributed tier
//! takes part. The out-of-box in-memory distributed tier paired with the
//! out-of-box local tier adds a second in-process copy and nothing else,
//! so that exact combination is treated as "no backend".

use hycache_domain::ports::{DistributedCache, LocalCache};
use std::sync::Arc;
use tracing::info;

/// Whether a distributed tier should be used alongside the given local tier
pub fn is_eligible(distributed: &dyn DistributedCache, local: &dyn LocalCache) -> bool {
    !(distributed.is_default_implementation() && local.is_default_implementation())
}

/// Apply the gate to an optional distributed tier
pub fn select_backend(
    distributed: Option<Arc<dyn DistributedCache>>,
    local: &dyn LocalCache,
) -> Option<Arc<dyn DistributedCache>> {
    let Some(distributed) = distributed else {
        info!(local = local.provider_name(), "No distributed cache configured");
        return None;
    };

    if is_eligible(distributed.as_ref(), local) {
        info!(
            provider = distributed.provider_name(),
            local = local.provider_name(),
            "Distributed cache accepted"
        );
        Some(distributed)
    } else {
        info!(
            provider = distributed.provider_name(),
            local = local.provider_name(),
            "Default in-memory distributed cache ignored"
        );
        None
    }
}
