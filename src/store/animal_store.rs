//! Animal Store Module
//!
//! HashMap storage behind a single reader/writer lock.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::Animal;

// == Animal Store ==
/// Thread-safe registry of animals keyed by id.
///
/// Writes hold the write lock for the whole check-and-mutate sequence;
/// lookups share the read lock.
#[derive(Debug, Default)]
pub struct AnimalStore {
    animals: RwLock<HashMap<i64, Animal>>,
}

impl AnimalStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Inserts `animal` under `animal.id` if that id is free.
    ///
    /// Fails with [`ApiError::DuplicateId`] and leaves the existing record
    /// untouched when the id is taken.
    pub async fn create(&self, animal: Animal) -> Result<()> {
        let mut animals = self.animals.write().await;

        if animals.contains_key(&animal.id) {
            return Err(ApiError::DuplicateId(animal.id));
        }

        debug!(id = animal.id, name = %animal.name, "animal created");
        animals.insert(animal.id, animal);
        Ok(())
    }

    // == Replace ==
    /// Stores `animal` under `id`, overwriting whatever was there.
    ///
    /// `animal.id` is stored as given and may differ from `id`.
    pub async fn replace(&self, id: i64, animal: Animal) {
        let mut animals = self.animals.write().await;
        let previous = animals.insert(id, animal);
        debug!(id, existed = previous.is_some(), "animal replaced");
    }

    // == Delete ==
    /// Removes the animal stored under `id`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut animals = self.animals.write().await;

        match animals.remove(&id) {
            Some(_) => {
                debug!(id, "animal deleted");
                Ok(())
            }
            None => Err(ApiError::NotFound(id)),
        }
    }

    // == List All ==
    /// Returns a snapshot of every stored animal in no particular order.
    ///
    /// An empty store is reported as [`ApiError::EmptyCollection`] rather
    /// than an empty list; clients of the v1 API depend on the 404.
    pub async fn list_all(&self) -> Result<Vec<Animal>> {
        let animals = self.animals.read().await;

        if animals.is_empty() {
            return Err(ApiError::EmptyCollection);
        }

        Ok(animals.values().cloned().collect())
    }

    // == Get By Id ==
    /// Returns a copy of the animal stored under `id`.
    pub async fn get(&self, id: i64) -> Result<Animal> {
        let animals = self.animals.read().await;
        animals.get(&id).cloned().ok_or(ApiError::NotFound(id))
    }

    // == Length ==
    /// Returns the current number of stored animals.
    pub async fn len(&self) -> usize {
        self.animals.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no animals are stored.
    pub async fn is_empty(&self) -> bool {
        self.animals.read().await.is_empty()
    }
}
