//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that turn configuration into a running
//! cache.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Builds a [`HybridCache`](hycache_application::HybridCache) from [`config::AppConfig`] |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{build_hybrid_cache, resolve_distributed_cache};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
