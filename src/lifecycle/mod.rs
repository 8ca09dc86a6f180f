//! Orchestration layer: registry wiring, batch admission and bootstrap
//! seeding, plus process-level tracing setup.

pub mod error;
pub mod registry;
pub mod tracing;

pub use error::*;
pub use registry::*;
