//! Default structured serializer
//!
//! Used for every type that has neither a built-in, an explicit nor a
//! factory-provided serializer.

use hycache_domain::error::{Error, Result};
use hycache_domain::ports::CacheSerializer;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Name reported by [`JsonSerializer`]
pub const JSON_SERIALIZER_NAME: &str = "json";

/// JSON serializer for any serde type
pub struct JsonSerializer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSerializer<T> {
    /// Create a JSON serializer
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSerializer")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> CacheSerializer<T> for JsonSerializer<T>
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| {
            Error::serialization_with_source(
                format!("failed to encode {} as JSON", std::any::type_name::<T>()),
                e,
            )
        })
    }

    fn deserialize(&self, payload: &[u8]) -> Result<T> {
        serde_json::from_slice(payload).map_err(|e| {
            Error::serialization_with_source(
                format!("failed to decode {} from JSON", std::any::type_name::<T>()),
                e,
            )
        })
    }

    fn serializer_name(&self) -> &str {
        JSON_SERIALIZER_NAME
    }
}
