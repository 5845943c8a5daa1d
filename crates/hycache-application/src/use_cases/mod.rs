//! Use Cases
//!
//! The hybrid cache orchestrator and its supporting types.

pub mod builder;
pub mod hybrid_cache;
pub mod stats;

pub use builder::HybridCacheBuilder;
pub use hybrid_cache::{CacheValue, HybridCache};
pub use stats::HybridCacheStats;
