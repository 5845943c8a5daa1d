//! Provider-specific constants

// ============================================================================
// LOCAL TIER CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the local tier
pub const LOCAL_CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

// ============================================================================
// DISTRIBUTED TIER CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the in-memory distributed tier
pub const MEMORY_DISTRIBUTED_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Redis default connection URI
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Cache namespace separator
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";

// ============================================================================
// COMPRESSION CONSTANTS
// ============================================================================

/// Payloads smaller than this are never compressed (bytes)
pub const COMPRESSION_THRESHOLD_BYTES: usize = 1024;

/// Marker byte for a payload stored as-is
pub const PAYLOAD_MARKER_RAW: u8 = 0x00;

/// Marker byte for a gzip-compressed payload
pub const PAYLOAD_MARKER_GZIP: u8 = 0x01;
