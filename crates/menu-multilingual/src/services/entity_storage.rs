//! Entity lookup.

use std::collections::HashMap;

use anyhow::Result;

use crate::models::EntityRef;

/// Loads entities referenced by menu link routes.
pub trait EntityStorage: Send + Sync {
    /// Load an entity by type and id.
    ///
    /// Returns `Ok(None)` if no such entity exists. Errors are reserved for
    /// backend failures.
    fn load(&self, entity_type: &str, id: &str) -> Result<Option<EntityRef>>;
}

/// Entity storage backed by an in-process map.
#[derive(Debug, Default, Clone)]
pub struct MemoryEntityStorage {
    entities: HashMap<(String, String), EntityRef>,
}

impl MemoryEntityStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity, keyed by its type and id.
    pub fn insert(&mut self, entity: EntityRef) {
        self.entities
            .insert((entity.entity_type.clone(), entity.id.clone()), entity);
    }
}

impl FromIterator<EntityRef> for MemoryEntityStorage {
    fn from_iter<I: IntoIterator<Item = EntityRef>>(iter: I) -> Self {
        let mut storage = Self::new();
        for entity in iter {
            storage.insert(entity);
        }
        storage
    }
}

impl EntityStorage for MemoryEntityStorage {
    fn load(&self, entity_type: &str, id: &str) -> Result<Option<EntityRef>> {
        Ok(self
            .entities
            .get(&(entity_type.to_string(), id.to_string()))
            .cloned())
    }
}
