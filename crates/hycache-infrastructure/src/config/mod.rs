//! Configuration management
//!
//! Serde configuration types and the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DistributedTierConfig, LocalTierConfig, LoggingConfig};
