use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::restriction::Restriction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Moderation state of a catalog entity.
pub enum EntityStatus {
    Pending,
    /// Seeded catalog entries carry no status and predate moderation.
    #[default]
    Approved,
    Rejected,
}

impl EntityStatus {
    #[inline]
    pub fn is_approved(&self) -> bool {
        matches!(self, EntityStatus::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Pending => "pending",
            EntityStatus::Approved => "approved",
            EntityStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Public,
    Private,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Public => "public",
            EntityKind::Private => "private",
        }
    }
}

/// Eligibility rules of a catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    #[serde(default)]
    pub states: Restriction,
    #[serde(default)]
    pub categories: Restriction,
    /// `None` means no income ceiling.
    #[serde(default)]
    pub max_income: Option<u64>,
    #[serde(default)]
    pub education_levels: Vec<String>,
    #[serde(default)]
    pub gender: Restriction,
    /// `true` means the offer is reserved for students with a disability.
    #[serde(default, rename = "disability")]
    pub disability_required: bool,
    #[serde(default)]
    pub religion: Restriction,
    #[serde(default)]
    pub area: Restriction,
    #[serde(default)]
    pub courses: Restriction,
}

/// A scholarship offer as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub application_steps: Vec<String>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub official_url: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, rename = "type")]
    pub kind: EntityKind,
    /// Owning donor for privately listed offers.
    #[serde(default)]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eligibility: Eligibility,
}

impl Entity {
    /// Creates an approved public entity with open eligibility.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}

/// Change notification emitted by the catalog owner after a successful write.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Created(Entity),
    Updated(Entity),
    StatusChanged {
        previous: EntityStatus,
        entity: Entity,
    },
    Deleted {
        entity_id: String,
    },
}

impl CatalogEvent {
    pub fn entity_id(&self) -> &str {
        match self {
            CatalogEvent::Created(entity)
            | CatalogEvent::Updated(entity)
            | CatalogEvent::StatusChanged { entity, .. } => &entity.id,
            CatalogEvent::Deleted { entity_id } => entity_id,
        }
    }
}
