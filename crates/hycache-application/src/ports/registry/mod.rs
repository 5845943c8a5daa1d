//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for distributed tier
//! providers. Uses the `linkme` crate for compile-time registration of
//! providers that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = redis" → RedisProvider       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in hycache-providers)
//!
//! ```ignore
//! use hycache_application::ports::registry::{
//!     DISTRIBUTED_CACHE_PROVIDERS, DistributedCacheProviderEntry,
//! };
//!
//! #[linkme::distributed_slice(DISTRIBUTED_CACHE_PROVIDERS)]
//! static REDIS_PROVIDER: DistributedCacheProviderEntry = DistributedCacheProviderEntry {
//!     name: "redis",
//!     description: "Redis distributed cache",
//!     factory: |config| Ok(Arc::new(RedisDistributedCache::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in hycache-infrastructure)
//!
//! ```ignore
//! use hycache_application::ports::registry::resolve_distributed_cache_provider;
//!
//! let config = DistributedCacheProviderConfig::new("redis").with_uri("redis://localhost");
//! let provider = resolve_distributed_cache_provider(&config)?;
//! ```

pub mod distributed_cache;

pub use distributed_cache::{
    DISTRIBUTED_CACHE_PROVIDERS, DistributedCacheProviderConfig, DistributedCacheProviderEntry,
    list_distributed_cache_providers, resolve_distributed_cache_provider,
};
