//! Pure data structures of the customer domain, implementing the
//! [`StoredEntity`](crate::repository::StoredEntity) trait.

pub mod customer;

pub use customer::*;
