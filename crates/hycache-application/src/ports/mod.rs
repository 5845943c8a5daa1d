//! Application ports
//!
//! Re-exports the domain provider ports and declares the provider registry.

pub mod registry;

pub use hycache_domain::ports::providers;
pub use registry::*;
