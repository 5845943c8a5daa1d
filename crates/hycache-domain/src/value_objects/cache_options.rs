//! Cache-wide options
//!
//! Bound once by the caller (or by the configuration loader) and immutable
//! for the lifetime of a cache instance.

use super::entry_options::HybridCacheEntryOptions;
use crate::constants::{DEFAULT_MAXIMUM_KEY_LENGTH, DEFAULT_MAXIMUM_PAYLOAD_BYTES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for a hybrid cache instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridCacheOptions {
    /// Maximum key length in characters; longer keys fail validation
    pub maximum_key_length: usize,

    /// Largest serialized payload written to (or accepted from) the distributed tier
    pub maximum_payload_bytes: usize,

    /// Forbid compression for every entry
    pub disable_compression: bool,

    /// Defaults applied when a call supplies no options (or leaves fields unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_entry_options: Option<HybridCacheEntryOptions>,
}

impl Default for HybridCacheOptions {
    fn default() -> Self {
        Self {
            maximum_key_length: DEFAULT_MAXIMUM_KEY_LENGTH,
            maximum_payload_bytes: DEFAULT_MAXIMUM_PAYLOAD_BYTES,
            disable_compression: false,
            default_entry_options: None,
        }
    }
}

impl HybridCacheOptions {
    /// Create options with the baked-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum key length
    pub fn with_maximum_key_length(mut self, length: usize) -> Self {
        self.maximum_key_length = length;
        self
    }

    /// Set the maximum distributed payload size
    pub fn with_maximum_payload_bytes(mut self, bytes: usize) -> Self {
        self.maximum_payload_bytes = bytes;
        self
    }

    /// Disable compression globally
    pub fn with_compression_disabled(mut self) -> Self {
        self.disable_compression = true;
        self
    }

    /// Set the default entry options
    pub fn with_default_entry_options(mut self, options: HybridCacheEntryOptions) -> Self {
        self.default_entry_options = Some(options);
        self
    }

    /// Check the options are usable; failures are configuration errors
    pub fn validate(&self) -> Result<()> {
        if self.maximum_key_length == 0 {
            return Err(Error::configuration("Maximum key length cannot be 0"));
        }
        if self.maximum_payload_bytes == 0 {
            return Err(Error::configuration("Maximum payload bytes cannot be 0"));
        }
        if let Some(defaults) = &self.default_entry_options {
            if defaults.expiration == Some(Duration::ZERO) {
                return Err(Error::configuration("Default expiration cannot be 0"));
            }
            if defaults.local_cache_expiration == Some(Duration::ZERO) {
                return Err(Error::configuration(
                    "Default local cache expiration cannot be 0",
                ));
            }
        }
        Ok(())
    }
}
