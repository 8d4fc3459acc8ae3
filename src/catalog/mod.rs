//! Scholarship catalog: entity model and the [`Catalog`] collaborator.
//!
//! The engine only reads approved entities. Writes, moderation and ownership live with
//! the catalog owner, which reports them as [`CatalogEvent`]s.

pub mod error;
pub mod file;
pub mod memory;
pub mod model;
pub mod restriction;


pub use error::CatalogError;
pub use file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
pub use model::{CatalogEvent, Eligibility, Entity, EntityKind, EntityStatus};
pub use restriction::{Restriction, WILDCARD};

use async_trait::async_trait;

#[async_trait]
/// Source of candidate entities.
pub trait Catalog: Send + Sync {
    /// Returns every entity whose status is approved, in catalog order.
    async fn list_approved(&self) -> Result<Vec<Entity>, CatalogError>;
}
