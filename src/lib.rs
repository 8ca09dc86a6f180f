#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Customer Registry
//!
//! > **A resource-oriented in-memory customer registry in Rust.**
//!
//! This crate manages a small collection of customer records in memory and
//! exposes create/read/delete operations through a resource-oriented
//! interface: a generic set-style CRUD repository, a validated wire
//! representation, and the admission policy that ties them together.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Entities In, Representations Out
//!
//! The stored [`Customer`](model::Customer) is the single source of truth.
//! Everything that crosses the process boundary is a derived
//! [`CustomerRepresentation`](resource::CustomerRepresentation), stamped
//! with a serial number, a correlation id and a timestamp at construction
//! time. Inbound representations are untrusted: a fixed, ordered rule chain
//! (see [`resource::rules`]) must pass in full before an entity is built.
//!
//! ### Generics: The Power of `T`
//!
//! The repository is written once, generically: any type implementing
//! [`StoredEntity`](repository::StoredEntity) gets the full
//! [`CrudRepository`](repository::CrudRepository) contract. Membership is
//! decided by identity (the id), never by comparing the other fields.
//!
//! ### Concurrency Model
//!
//! One [`InMemoryRepository`](repository::InMemoryRepository) instance is
//! shared process-wide; a single coarse lock guards every operation, and the
//! mapper's serial counter is atomic, so representations never skip or
//! repeat a serial under concurrent callers.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`repository`])
//! The generic storage layer: the [`CrudRepository`](repository::CrudRepository)
//! contract and its in-memory implementation.
//!
//! ### 2. The Data ([`model`])
//! Pure domain structures, currently just [`Customer`](model::Customer).
//!
//! ### 3. The Interface ([`resource`])
//! The wire representation, the acceptance rules, and the
//! [`CustomerMapper`](resource::CustomerMapper) with its two inbound paths
//! (structured and loose key/value).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CustomerRegistry`](lifecycle::CustomerRegistry) wires store and mapper
//! together, seeds the bootstrap fixture and carries the batch-admission
//! policy.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod resource;
