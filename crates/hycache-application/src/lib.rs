//! Application Layer - hycache
//!
//! Implements the hybrid cache on top of the domain ports: a local tier,
//! an optional distributed tier and per-type payload serializers.
//!
//! ## Architecture
//!
//! - `domain_services::*`: serializer resolution, options merge, backend
//!   eligibility and the stampede coordinator
//! - `serializers::*`: the built-in and default structured serializers
//! - `use_cases::*`: the [`HybridCache`] orchestrator and its builder
//! - `ports::registry::*`: link-time registry of distributed tier providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `hycache-domain`: for options, errors and port traits
//! - Pure Rust libraries for async, serialization, etc.

pub mod domain_services;
pub mod ports;
pub mod serializers;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
