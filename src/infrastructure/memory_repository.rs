use crate::domain::contributor::{Entity, EntityId};
use crate::domain::error::DomainError;
use crate::domain::interfaces::{ReadRepository, Repository};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI32, Ordering};

/// Process-local store keyed by entity id.
///
/// Ids are handed out sequentially from 1 and never below an id that was
/// stored explicitly. `delete` is a remove-by-key, so of
/// two racing deletes of the same entity only one succeeds; the other gets a
/// storage error.
pub struct InMemoryRepository<T: Entity> {
    items: DashMap<EntityId, T>,
    next_id: AtomicI32,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&self) -> Result<EntityId, DomainError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map_err(|_| DomainError::Storage("entity id sequence exhausted".to_string()))
    }
}

#[async_trait]
impl<T: Entity> ReadRepository<T> for InMemoryRepository<T> {
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, DomainError> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let mut all: Vec<T> = self.items.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(|item| item.id());
        Ok(all)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn add(&self, mut entity: T) -> Result<T, DomainError> {
        if entity.id() == 0 {
            // Skip ids already taken by explicit inserts.
            loop {
                let id = self.allocate_id()?;
                if let Entry::Vacant(slot) = self.items.entry(id) {
                    entity.assign_id(id);
                    slot.insert(entity.clone());
                    return Ok(entity);
                }
            }
        }

        let id = entity.id();
        match self.items.entry(id) {
            Entry::Occupied(_) => Err(DomainError::Storage(format!("entity {id} already exists"))),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                Ok(entity)
            }
        }
    }

    async fn update(&self, entity: &T) -> Result<(), DomainError> {
        match self.items.get_mut(&entity.id()) {
            Some(mut stored) => {
                *stored = entity.clone();
                Ok(())
            }
            None => Err(DomainError::Storage(format!(
                "entity {} does not exist",
                entity.id()
            ))),
        }
    }

    async fn delete(&self, entity: &T) -> Result<(), DomainError> {
        self.items
            .remove(&entity.id())
            .map(|_| ())
            .ok_or_else(|| DomainError::Storage(format!("entity {} does not exist", entity.id())))
    }
}
