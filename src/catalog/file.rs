use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::error::CatalogError;
use super::model::Entity;
use super::Catalog;

/// Catalog read from a JSON array of entities on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every entity regardless of status.
    pub async fn load_all(&self) -> Result<Vec<Entity>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::Unavailable {
                    reason: format!("catalog file not found: {}", self.path.display()),
                }
            } else {
                CatalogError::Io(e)
            }
        })?;
        let entities: Vec<Entity> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = entities.len(), "Loaded catalog file");
        Ok(entities)
    }
}

#[async_trait]
impl Catalog for JsonFileCatalog {
    async fn list_approved(&self) -> Result<Vec<Entity>, CatalogError> {
        let mut entities = self.load_all().await?;
        entities.retain(|e| e.is_approved());
        Ok(entities)
    }
}
