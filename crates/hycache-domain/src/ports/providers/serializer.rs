//! Serializer Port
//!
//! Converts values to and from the byte payloads stored by the distributed
//! tier. Serializers are resolved once per value type and then reused, so
//! implementations must be stateless or internally synchronised.

use crate::error::Result;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Typed serializer for one value type
pub trait CacheSerializer<T>: Send + Sync {
    /// Encode a value into its payload
    fn serialize(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode a payload back into a value
    fn deserialize(&self, payload: &[u8]) -> Result<T>;

    /// Name used in diagnostics and tests
    fn serializer_name(&self) -> &str;
}

/// The value type a serializer is being resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerializerRequest {
    type_id: TypeId,
    type_name: &'static str,
}

impl SerializerRequest {
    /// Describe the type `T`
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Runtime identity of the requested type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified name of the requested type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the request is for `T`
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// A serializer with its value type erased
///
/// Lets registries store serializers for unrelated types side by side. The
/// typed handle is recovered with [`ErasedSerializer::downcast`].
#[derive(Clone)]
pub struct ErasedSerializer {
    type_id: TypeId,
    type_name: &'static str,
    name: String,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ErasedSerializer {
    /// Erase a shared typed serializer
    pub fn new<T: Any>(serializer: Arc<dyn CacheSerializer<T>>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            name: serializer.serializer_name().to_string(),
            inner: Arc::new(serializer),
        }
    }

    /// Erase an owned typed serializer
    pub fn from_serializer<T, S>(serializer: S) -> Self
    where
        T: Any,
        S: CacheSerializer<T> + 'static,
    {
        Self::new::<T>(Arc::new(serializer))
    }

    /// The value type this serializer handles
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the value type this serializer handles
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name reported by the wrapped serializer
    pub fn serializer_name(&self) -> &str {
        &self.name
    }

    /// Recover the typed serializer; `None` when it handles another type
    pub fn downcast<T: Any>(&self) -> Option<Arc<dyn CacheSerializer<T>>> {
        self.inner
            .downcast_ref::<Arc<dyn CacheSerializer<T>>>()
            .cloned()
    }
}

impl fmt::Debug for ErasedSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedSerializer")
            .field("type_name", &self.type_name)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Produces serializers for types it recognises
///
/// Consulted, in registration order, for types without an explicit
/// serializer. Returning `Ok(None)` declines the type; returning an error
/// aborts resolution as a configuration failure.
pub trait SerializerFactory: Send + Sync + fmt::Debug {
    /// Offer a serializer for the requested type
    fn try_create(&self, request: &SerializerRequest) -> Result<Option<ErasedSerializer>>;

    /// Name used in diagnostics
    fn factory_name(&self) -> &str;
}
