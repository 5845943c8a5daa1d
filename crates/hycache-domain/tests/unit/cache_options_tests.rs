//! Unit tests for cache-wide options

use hycache_domain::constants::{DEFAULT_MAXIMUM_KEY_LENGTH, DEFAULT_MAXIMUM_PAYLOAD_BYTES};
use hycache_domain::{HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions};
use std::time::Duration;

#[test]
fn test_defaults() {
    let options = HybridCacheOptions::default();
    assert_eq!(options.maximum_key_length, DEFAULT_MAXIMUM_KEY_LENGTH);
    assert_eq!(options.maximum_payload_bytes, DEFAULT_MAXIMUM_PAYLOAD_BYTES);
    assert!(!options.disable_compression);
    assert!(options.default_entry_options.is_none());
    assert!(options.validate().is_ok());
}

#[test]
fn test_builder_round_trips_configured_values() {
    let defaults = HybridCacheEntryOptions::new()
        .with_expiration(Duration::from_secs(120))
        .with_flags(HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ);
    let options = HybridCacheOptions::new()
        .with_maximum_key_length(937)
        .with_default_entry_options(defaults.clone());

    assert_eq!(options.maximum_key_length, 937);
    assert_eq!(options.default_entry_options, Some(defaults));
}

#[test]
fn test_zero_key_length_is_rejected() {
    let options = HybridCacheOptions::new().with_maximum_key_length(0);
    let err = options.validate().unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_zero_payload_limit_is_rejected() {
    let options = HybridCacheOptions::new().with_maximum_payload_bytes(0);
    assert!(options.validate().unwrap_err().is_configuration());
}

#[test]
fn test_zero_default_expiration_is_rejected() {
    let options = HybridCacheOptions::new()
        .with_default_entry_options(HybridCacheEntryOptions::new().with_expiration(Duration::ZERO));
    assert!(options.validate().unwrap_err().is_configuration());

    let options = HybridCacheOptions::new().with_default_entry_options(
        HybridCacheEntryOptions::new().with_local_cache_expiration(Duration::ZERO),
    );
    assert!(options.validate().unwrap_err().is_configuration());
}

#[test]
fn test_partial_toml_keeps_remaining_defaults() {
    let options: HybridCacheOptions = toml::from_str(
        r#"
        maximum_key_length = 937

        [default_entry_options]
        expiration = "120s"
        flags = "DISABLE_LOCAL_CACHE_READ"
        "#,
    )
    .expect("valid cache options");

    assert_eq!(options.maximum_key_length, 937);
    assert_eq!(options.maximum_payload_bytes, DEFAULT_MAXIMUM_PAYLOAD_BYTES);
    let defaults = options.default_entry_options.expect("default entry options");
    assert_eq!(defaults.expiration, Some(Duration::from_secs(120)));
    assert!(defaults.local_cache_expiration.is_none());
}
