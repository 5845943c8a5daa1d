//! Domain services of the hybrid cache
//!
//! The building blocks the orchestrator composes: serializer resolution,
//! options merge, backend eligibility and single-flight population.

pub mod backend_gate;
pub mod entry_options;
pub mod serializer_registry;
pub mod stampede;

pub use backend_gate::{is_eligible, select_backend};
pub use entry_options::{EffectiveEntryOptions, EntryOptionsResolver, merge};
pub use serializer_registry::{SerializerRegistry, SerializerRegistryBuilder};
pub use stampede::{FlightKey, FlightLease, StampedeCoordinator};
