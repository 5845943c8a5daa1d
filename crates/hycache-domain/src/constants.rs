//! Domain layer constants
//!
//! Contains the baked-in fallbacks used when options are never configured.
//! Infrastructure-specific constants remain in `hycache_infrastructure::constants`.

use std::time::Duration;

// ============================================================================
// KEY AND PAYLOAD LIMITS
// ============================================================================

/// Default maximum cache key length, in characters
pub const DEFAULT_MAXIMUM_KEY_LENGTH: usize = 1024;

/// Default maximum serialized payload written to the distributed tier (1 MiB)
pub const DEFAULT_MAXIMUM_PAYLOAD_BYTES: usize = 1024 * 1024;

// ============================================================================
// EXPIRATION FALLBACKS
// ============================================================================

/// System-wide fallback expiration in seconds (5 minutes)
pub const DEFAULT_EXPIRATION_SECS: u64 = 300;

/// System-wide fallback expiration used when no default entry options are set
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(DEFAULT_EXPIRATION_SECS);
