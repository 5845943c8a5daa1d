//! Configuration loader tests

use hycache_domain::value_objects::{
    HybridCacheEntryFlags, HybridCacheEntryOptions, HybridCacheOptions,
};
use hycache_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, DistributedTierConfig, LocalTierConfig,
};
use hycache_infrastructure::constants::{DEFAULT_DISTRIBUTED_PROVIDER, DEFAULT_LOCAL_MAX_ENTRIES};
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.cache, HybridCacheOptions::default());
    assert_eq!(config.local.max_entries, DEFAULT_LOCAL_MAX_ENTRIES);
    assert!(!config.distributed.enabled);
    assert_eq!(config.distributed.provider, DEFAULT_DISTRIBUTED_PROVIDER);
}

#[test]
fn test_load_from_toml_file() {
    let file = write_config(
        r#"
[cache]
maximum_key_length = 937
maximum_payload_bytes = 4096
disable_compression = true

[cache.default_entry_options]
expiration = "2m"
local_cache_expiration = 30
flags = "DISABLE_LOCAL_CACHE_READ | DISABLE_COMPRESSION"

[local]
max_entries = 500

[distributed]
enabled = true
provider = "redis"
uri = "redis://cache.internal:6379"
namespace = "orders"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load");

    assert_eq!(config.cache.maximum_key_length, 937);
    assert_eq!(config.cache.maximum_payload_bytes, 4096);
    assert!(config.cache.disable_compression);

    let defaults = config.cache.default_entry_options.expect("defaults");
    assert_eq!(defaults.expiration, Some(Duration::from_secs(120)));
    assert_eq!(defaults.local_cache_expiration, Some(Duration::from_secs(30)));
    assert_eq!(
        defaults.flags,
        Some(
            HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ
                | HybridCacheEntryFlags::DISABLE_COMPRESSION
        )
    );

    assert_eq!(config.local.max_entries, 500);
    assert!(config.distributed.enabled);
    assert_eq!(config.distributed.provider, "redis");
    assert_eq!(
        config.distributed.uri.as_deref(),
        Some("redis://cache.internal:6379")
    );
    assert_eq!(config.distributed.namespace.as_deref(), Some("orders"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[local]\nmax_entries = 42\n");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load");

    assert_eq!(config.local.max_entries, 42);
    assert_eq!(config.cache, HybridCacheOptions::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("load");
    assert_eq!(config.local, LocalTierConfig::default());
}

#[test]
fn test_invalid_values_are_configuration_errors() {
    for contents in [
        "[cache]\nmaximum_key_length = 0\n",
        "[cache]\nmaximum_payload_bytes = 0\n",
        "[cache.default_entry_options]\nexpiration = \"0s\"\n",
        "[local]\nmax_entries = 0\n",
        "[distributed]\nenabled = true\nprovider = \"\"\n",
        "[logging]\nlevel = \"loud\"\n",
    ] {
        let file = write_config(contents);
        let err = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .expect_err(contents);
        assert!(err.is_configuration(), "{contents}: {err}");
    }
}

#[test]
fn test_malformed_duration_is_rejected() {
    let file = write_config("[cache.default_entry_options]\nexpiration = \"soon\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("bad duration");
    assert!(err.is_configuration());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("hycache.toml");

    let config = ConfigBuilder::new()
        .with_cache(
            HybridCacheOptions::new()
                .with_maximum_key_length(256)
                .with_default_entry_options(
                    HybridCacheEntryOptions::new()
                        .with_expiration(Duration::from_secs(90))
                        .with_flags(HybridCacheEntryFlags::DISABLE_DISTRIBUTED_CACHE),
                ),
        )
        .with_local(LocalTierConfig { max_entries: 64 })
        .with_distributed(DistributedTierConfig {
            enabled: true,
            max_entries: Some(128),
            compression_threshold_bytes: Some(2048),
            ..DistributedTierConfig::default()
        })
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save");
    assert_eq!(loader.config_path(), Some(path.as_path()));

    let reloaded = loader.load().expect("reload");
    assert_eq!(reloaded, config);
}
