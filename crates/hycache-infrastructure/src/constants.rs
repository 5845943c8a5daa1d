//! Infrastructure layer constants
//!
//! Domain fallbacks (key length, payload size, expiration) live in
//! `hycache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hycache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hycache";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "HYCACHE";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// TIER CONSTANTS
// ============================================================================

/// Default entry bound of the local tier
pub const DEFAULT_LOCAL_MAX_ENTRIES: u64 = 10_000;

/// Distributed provider used when none is configured
pub const DEFAULT_DISTRIBUTED_PROVIDER: &str = "memory";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "HYCACHE_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "hycache";
