//! Domain Port Interfaces
//!
//! Traits implemented by the providers crate and consumed by the
//! application layer.

pub mod providers;

pub use providers::{
    CacheSerializer, DistributedCache, DistributedEntryOptions, ErasedSerializer, LocalCache,
    LocalCacheEntry, SerializerFactory, SerializerRequest,
};
