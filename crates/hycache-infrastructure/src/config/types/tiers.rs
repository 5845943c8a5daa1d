//! Tier configuration types

use crate::constants::{DEFAULT_DISTRIBUTED_PROVIDER, DEFAULT_LOCAL_MAX_ENTRIES};
use serde::{Deserialize, Serialize};

/// Local tier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalTierConfig {
    /// Maximum number of entries held in process
    pub max_entries: u64,
}

impl Default for LocalTierConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_LOCAL_MAX_ENTRIES,
        }
    }
}

/// Distributed tier configuration
///
/// `provider` names an entry of the distributed provider registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributedTierConfig {
    /// Whether a distributed tier is attached at all
    pub enabled: bool,

    /// Registered provider name (`memory`, `redis`)
    pub provider: String,

    /// Connection URI for networked providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Key namespace applied by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Entry bound for in-process providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<u64>,

    /// Payload size from which compressing providers compress, in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_threshold_bytes: Option<usize>,
}

impl Default for DistributedTierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: DEFAULT_DISTRIBUTED_PROVIDER.to_string(),
            uri: None,
            namespace: None,
            max_entries: None,
            compression_threshold_bytes: None,
        }
    }
}
