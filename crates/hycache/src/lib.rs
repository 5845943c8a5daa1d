//! # hycache
//!
//! A multi-tier object cache: a fast in-process tier in front of an optional
//! shared distributed tier, with get-or-create semantics that run the value
//! factory at most once per key at a time.
//!
//! ## Example
//!
//! ```no_run
//! use hycache::{AppConfig, HybridCacheEntryOptions, build_hybrid_cache};
//! use std::time::Duration;
//!
//! # async fn run() -> hycache::Result<()> {
//! let cache = build_hybrid_cache(&AppConfig::default())?;
//!
//! let options = HybridCacheEntryOptions::new().with_expiration(Duration::from_secs(120));
//! let name: String = cache
//!     .get_or_create("customer:42:name", |_token| async { Ok("Ada".to_string()) }, Some(&options))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - options, errors and the tier/serializer ports
//! - `application` - the orchestrator, stampede coordinator and serializer registry
//! - `providers` - moka local tier, in-memory and Redis distributed tiers
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - options, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hycache_domain::*;
}

/// Application layer - the hybrid cache and its building blocks
pub mod application {
    pub use hycache_application::*;
}

/// Tier implementations
pub mod providers {
    pub use hycache_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use hycache_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use hycache_application::{HybridCache, HybridCacheBuilder, HybridCacheStats};
pub use hycache_domain::value_objects::{
    HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions,
};
pub use hycache_domain::{Error, Result};
pub use hycache_infrastructure::{AppConfig, ConfigLoader, build_hybrid_cache};
pub use tokio_util::sync::CancellationToken;
