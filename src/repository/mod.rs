//! Generic storage layer for resource entities.
//!
//! This module provides the set-style CRUD contract the rest of the crate is
//! written against, together with its single in-memory implementation.
//!
//! # Main Components
//!
//! - [`StoredEntity`] - Trait that resource types implement to be storable
//! - [`CrudRepository`] - The generic repository contract
//! - [`InMemoryRepository`] - `HashMap` store behind one coarse lock
//!
//! A persistent implementation can slot in later by implementing
//! [`CrudRepository`]; nothing above this layer depends on the backing store.

pub mod core;
pub mod memory;

// Re-export core types for convenience
pub use core::*;
pub use memory::*;
