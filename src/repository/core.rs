//! # Core Repository Contract
//!
//! This module defines the generic building blocks of the storage layer.
//!
//! ## Key Types
//!
//! - [`StoredEntity`]: The trait that all storable resource types must implement.
//! - [`CrudRepository`]: The generic set-style CRUD contract.
//! - [`RepositoryError`]: Errors surfaced by repository implementations.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// repository.
///
/// # Architecture Note
/// By defining a contract (`StoredEntity`) that resource types must satisfy,
/// the repository logic is written *once* and reused for any entity. The
/// associated `Id` type enforces type safety: a `Customer` store can only be
/// queried with customer ids.
///
/// Membership is decided by identity, not by value: an implementation keys
/// its store on `id()` and never compares other fields.
pub trait StoredEntity: Clone + Send + 'static {
    /// The unique identifier for this entity (e.g., u64, String, Uuid).
    type Id: Eq + Hash + Clone + Send + Debug + Display;

    /// The identity key of this entity.
    fn id(&self) -> Self::Id;
}

/// Errors that can occur within the repository layer.
///
/// The in-memory implementation only fails when its store lock is poisoned;
/// the enum is non-exhaustive so a future persistent implementation can add
/// backend failures without breaking callers.
#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum RepositoryError {
    #[error("store access failed: {0}")]
    Store(String),
}

/// Generic set-style CRUD contract over a collection of entities.
///
/// # Contract
/// The store is a set by identity: no two entries share an id, and
/// [`count`](Self::count) always equals the number of distinct ids held.
/// Saving an entity whose id already exists overwrites the prior entry;
/// deleting an absent target is a no-op, not an error.
///
/// Operations complete synchronously in time proportional to the data size
/// and perform no I/O. Implementations shared across call paths must guard
/// every operation with a single exclusion mechanism.
pub trait CrudRepository<T: StoredEntity> {
    /// Inserts the entity, or overwrites the entry holding the same id.
    /// Returns the stored value.
    fn save(&self, entity: T) -> Result<T, RepositoryError>;

    /// Saves every entity in order. Semantics per element match
    /// [`save`](Self::save).
    fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, RepositoryError>;

    /// Whether an entity with this id is present.
    fn exists_by_id(&self, id: &T::Id) -> Result<bool, RepositoryError>;

    /// The entity with this id, if any.
    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, RepositoryError>;

    /// Every stored entity. No iteration order is promised.
    fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// The subset of entities whose id appears in `ids`, deduplicated by
    /// identity (duplicate input ids yield one hit).
    fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, RepositoryError>;

    /// Number of stored entities.
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Removes the entity with this id. A no-op when the id is not present.
    fn delete_by_id(&self, id: &T::Id) -> Result<(), RepositoryError>;

    /// Removes the entry matching this entity's identity. Only the id is
    /// compared; the other fields play no part.
    fn delete(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Removes every listed id. Semantics per element match
    /// [`delete_by_id`](Self::delete_by_id).
    fn delete_all_by_id(&self, ids: &[T::Id]) -> Result<(), RepositoryError>;

    /// Removes every listed entity. Semantics per element match
    /// [`delete`](Self::delete).
    fn delete_all_of(&self, entities: &[T]) -> Result<(), RepositoryError>;

    /// Clears the store unconditionally.
    fn delete_all(&self) -> Result<(), RepositoryError>;
}
