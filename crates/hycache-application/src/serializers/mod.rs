//! Serializer implementations shipped with the cache

pub mod inbuilt;
pub mod json;

pub use inbuilt::InbuiltSerializer;
pub use json::JsonSerializer;
