//! Main application configuration

use super::logging::LoggingConfig;
use super::tiers::{DistributedTierConfig, LocalTierConfig};
use hycache_domain::value_objects::HybridCacheOptions;
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [cache]
/// maximum_key_length = 1024
///
/// [cache.default_entry_options]
/// expiration = "2m"
/// flags = "DISABLE_COMPRESSION"
///
/// [distributed]
/// enabled = true
/// provider = "redis"
/// uri = "redis://localhost:6379"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache-wide options
    pub cache: HybridCacheOptions,

    /// Local tier settings
    pub local: LocalTierConfig,

    /// Distributed tier settings
    pub distributed: DistributedTierConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
