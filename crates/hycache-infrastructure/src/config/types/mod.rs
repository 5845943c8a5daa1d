//! Configuration types module

pub mod app;
pub mod logging;
pub mod tiers;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use tiers::{DistributedTierConfig, LocalTierConfig};
