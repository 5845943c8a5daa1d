//! Cache Tier Implementations
//!
//! ## Available Providers
//!
//! | Provider | Tier | Description |
//! |----------|------|-------------|
//! | [`MokaLocalCache`] | Local | In-process typed entries with per-entry TTL |
//! | [`MemoryDistributedCache`] | Distributed | Out-of-box in-process byte store |
//! | [`RedisDistributedCache`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Single Instance**: `MokaLocalCache` alone; the memory distributed tier
//!   is ignored when paired with it
//! - **Multi Instance**: `MokaLocalCache` with `RedisDistributedCache`

pub mod compression;
#[cfg(feature = "cache-moka")]
mod expiry;
#[cfg(feature = "cache-moka")]
pub mod memory;
#[cfg(feature = "cache-moka")]
pub mod moka;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use self::memory::MemoryDistributedCache;
#[cfg(feature = "cache-moka")]
pub use self::moka::MokaLocalCache;
#[cfg(feature = "cache-redis")]
pub use self::redis::RedisDistributedCache;
