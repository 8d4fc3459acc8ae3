use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::CatalogError;
use super::model::Entity;
use super::Catalog;

/// Catalog held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entities: RwLock<Vec<Entity>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }

    /// Inserts `entity`, replacing an existing entity with the same id in place.
    pub fn upsert(&self, entity: Entity) {
        let mut entities = self.entities.write();
        match entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => *existing = entity,
            None => entities.push(entity),
        }
    }

    pub fn remove(&self, id: &str) -> Option<Entity> {
        let mut entities = self.entities.write();
        let index = entities.iter().position(|e| e.id == id)?;
        Some(entities.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.entities.read().iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_approved(&self) -> Result<Vec<Entity>, CatalogError> {
        Ok(self
            .entities
            .read()
            .iter()
            .filter(|e| e.is_approved())
            .cloned()
            .collect())
    }
}
