//! In-memory repository implementation.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use super::core::{CrudRepository, RepositoryError, StoredEntity};

/// A `HashMap`-backed repository guarded by one coarse-grained lock.
///
/// # Concurrency Model
/// The store is a process-wide resource: cloning shares the underlying map,
/// so a single instance can serve every call path. Each operation takes the
/// one lock for its full duration, which keeps the invariants (unique ids,
/// `count` = distinct ids) intact under concurrent callers without any
/// finer-grained machinery.
pub struct InMemoryRepository<T: StoredEntity> {
    entries: Arc<Mutex<HashMap<T::Id, T>>>,
}

impl<T: StoredEntity> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // Extract just the type name (e.g., "Customer" instead of
    // "customer_registry::model::customer::Customer") for log fields.
    fn entity_type() -> &'static str {
        std::any::type_name::<T>().split("::").last().unwrap_or("Unknown")
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<T::Id, T>>, RepositoryError> {
        self.entries
            .lock()
            .map_err(|_| RepositoryError::Store("store lock poisoned".into()))
    }
}

impl<T: StoredEntity> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: StoredEntity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> CrudRepository<T> for InMemoryRepository<T> {
    fn save(&self, entity: T) -> Result<T, RepositoryError> {
        let entity_type = Self::entity_type();
        let mut entries = self.lock()?;
        let id = entity.id();
        entries.insert(id.clone(), entity.clone());
        info!(entity_type, %id, size = entries.len(), "Saved");
        Ok(entity)
    }

    fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, RepositoryError> {
        entities.into_iter().map(|entity| self.save(entity)).collect()
    }

    fn exists_by_id(&self, id: &T::Id) -> Result<bool, RepositoryError> {
        let entries = self.lock()?;
        Ok(entries.contains_key(id))
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, RepositoryError> {
        let entity_type = Self::entity_type();
        let entries = self.lock()?;
        let hit = entries.get(id).cloned();
        debug!(entity_type, %id, found = hit.is_some(), "Get");
        Ok(hit)
    }

    fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        let entries = self.lock()?;
        Ok(entries.values().cloned().collect())
    }

    fn find_all_by_id(&self, ids: &[T::Id]) -> Result<Vec<T>, RepositoryError> {
        let entries = self.lock()?;
        let mut seen = HashSet::new();
        let mut hits = Vec::new();
        for id in ids {
            if let Some(entity) = entries.get(id) {
                if seen.insert(id.clone()) {
                    hits.push(entity.clone());
                }
            }
        }
        Ok(hits)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let entries = self.lock()?;
        Ok(entries.len())
    }

    fn delete_by_id(&self, id: &T::Id) -> Result<(), RepositoryError> {
        let entity_type = Self::entity_type();
        let mut entries = self.lock()?;
        match entries.remove(id) {
            Some(_) => info!(entity_type, %id, size = entries.len(), "Deleted"),
            None => debug!(entity_type, %id, "Not present, nothing deleted"),
        }
        Ok(())
    }

    fn delete(&self, entity: &T) -> Result<(), RepositoryError> {
        self.delete_by_id(&entity.id())
    }

    fn delete_all_by_id(&self, ids: &[T::Id]) -> Result<(), RepositoryError> {
        for id in ids {
            self.delete_by_id(id)?;
        }
        Ok(())
    }

    fn delete_all_of(&self, entities: &[T]) -> Result<(), RepositoryError> {
        for entity in entities {
            self.delete(entity)?;
        }
        Ok(())
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        let entity_type = Self::entity_type();
        let mut entries = self.lock()?;
        entries.clear();
        info!(entity_type, "Cleared");
        Ok(())
    }
}
