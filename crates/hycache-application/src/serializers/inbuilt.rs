//! Built-in serializer for text and raw bytes
//!
//! Strings are stored as their UTF-8 bytes and byte vectors as-is. These two
//! types never go through registered or default serializers.

use hycache_domain::error::Result;
use hycache_domain::ports::CacheSerializer;

/// Name reported by [`InbuiltSerializer`]
pub const INBUILT_SERIALIZER_NAME: &str = "inbuilt";

/// Serializer for `String` and `Vec<u8>` values
#[derive(Debug, Clone, Copy, Default)]
pub struct InbuiltSerializer;

impl CacheSerializer<String> for InbuiltSerializer {
    fn serialize(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn deserialize(&self, payload: &[u8]) -> Result<String> {
        Ok(String::from_utf8(payload.to_vec())?)
    }

    fn serializer_name(&self) -> &str {
        INBUILT_SERIALIZER_NAME
    }
}

impl CacheSerializer<Vec<u8>> for InbuiltSerializer {
    fn serialize(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(value.clone())
    }

    fn deserialize(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(payload.to_vec())
    }

    fn serializer_name(&self) -> &str {
        INBUILT_SERIALIZER_NAME
    }
}
