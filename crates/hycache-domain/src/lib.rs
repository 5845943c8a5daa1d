//! # Domain Layer
//!
//! Core types of the hybrid cache: entry and cache options, the error type
//! and the ports implemented by storage tiers and serializers.
//!
//! This crate has no runtime dependencies beyond serialization and holds no
//! state of its own.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions};
