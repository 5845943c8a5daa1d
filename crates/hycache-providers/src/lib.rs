//! # hycache - Tier Implementations
//!
//! Implementations of the local and distributed tier ports defined in
//! `hycache-domain`. Distributed tiers register themselves in the
//! application-layer registry so configuration can select them by name.
//!
//! | Port | Implementations |
//! |------|-----------------|
//! | `LocalCache` | Moka |
//! | `DistributedCache` | Memory (out-of-box default), Redis |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! hycache-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

// Re-export hycache-domain types commonly used with providers
pub use hycache_domain::error::{Error, Result};
pub use hycache_domain::ports::providers::{DistributedCache, LocalCache};

/// Provider-specific constants
pub mod constants;

/// Cache tier implementations
pub mod cache;

#[cfg(feature = "cache-moka")]
pub use cache::{MemoryDistributedCache, MokaLocalCache};
#[cfg(feature = "cache-redis")]
pub use cache::RedisDistributedCache;
