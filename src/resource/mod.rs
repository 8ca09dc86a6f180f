//! Resource model of the `/customers` endpoint family: the wire
//! representation, the acceptance rules applied to inbound data, and the
//! mapper converting between representations and entities.
//!
//! # Main Components
//!
//! - [`CustomerRepresentation`] - Structured wire form of a customer
//! - [`rules`] - The fixed, ordered acceptance chain
//! - [`CustomerMapper`] - Entity ⇄ representation conversion, loose
//!   key/value ingestion and free-id assignment

pub mod dto;
pub mod mapper;
pub mod rules;

pub use dto::*;
pub use mapper::*;
pub use rules::{Rule, Violation, TIME_SENT_FLOOR_MS};
