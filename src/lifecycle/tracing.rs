//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the registry.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The subscriber uses a compact format that hides the
//! crate/module prefix (`with_target(false)`); log lines carry structured
//! fields (`entity_type`, `id`, `size`, `rule`, ...) instead.
//!
//! ## What Gets Traced
//!
//! - **Store mutations**: saves, deletes and clears, at `info!`, with the
//!   entity type and resulting store size
//! - **Lookups**: at `debug!`, with the id and whether it was found
//! - **Rule failures**: every failing acceptance rule, at `warn!`, naming
//!   the rule and the offending value
//! - **Admission outcomes**: conflicts and batch aborts, at `warn!`
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show lookups and free-id assignment as well
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=customer_registry::resource=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
