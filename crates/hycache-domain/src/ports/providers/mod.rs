//! Provider ports
//!
//! Interfaces the hybrid cache consumes: the two storage tiers and the
//! payload serializers.

pub mod distributed_cache;
pub mod local_cache;
pub mod serializer;

pub use distributed_cache::{DistributedCache, DistributedEntryOptions};
pub use local_cache::{LocalCache, LocalCacheEntry};
pub use serializer::{CacheSerializer, ErasedSerializer, SerializerFactory, SerializerRequest};
