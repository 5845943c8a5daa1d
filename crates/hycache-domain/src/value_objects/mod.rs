//! Value Objects
//!
//! Immutable option types shared by every layer.

pub(crate) mod duration_serde;

/// Cache-wide options
pub mod cache_options;
/// Per-entry options and flags
pub mod entry_options;

pub use cache_options::HybridCacheOptions;
pub use entry_options::{HybridCacheEntryFlags, HybridCacheEntryOptions};
