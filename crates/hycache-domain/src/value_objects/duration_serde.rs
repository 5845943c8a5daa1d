//! Serde adapter for optional durations
//!
//! Serializes as a human-readable string (`"2m"`, `"1h 30m"`) and accepts
//! either such a string or a plain number of seconds when deserializing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Text(String),
    Seconds(u64),
}

/// Serialize an optional duration as humantime text
pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => {
            serializer.serialize_some(&humantime::format_duration(*duration).to_string())
        }
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional duration from humantime text or whole seconds
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DurationRepr>::deserialize(deserializer)?
        .map(|repr| match repr {
            DurationRepr::Text(text) => humantime::parse_duration(text.trim())
                .map_err(|e| D::Error::custom(format!("invalid duration '{text}': {e}"))),
            DurationRepr::Seconds(secs) => Ok(Duration::from_secs(secs)),
        })
        .transpose()
}
