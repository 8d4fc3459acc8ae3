//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use scholar::catalog::{Eligibility, Entity, EntityKind, EntityStatus, Restriction};
use scholar::profile::{IncomeInput, ProfileInput};

#[derive(Default)]
pub struct EntityBuilder {
    id: String,
    name: String,
    description: String,
    status: EntityStatus,
    kind: EntityKind,
    eligibility: Eligibility,
}

impl EntityBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Scholarship {id}"),
            ..Default::default()
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn private(mut self) -> Self {
        self.kind = EntityKind::Private;
        self
    }

    pub fn states(mut self, states: &[&str]) -> Self {
        self.eligibility.states = Restriction::restricted_to(states.iter().copied());
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.eligibility.categories = Restriction::restricted_to(categories.iter().copied());
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.eligibility.gender = Restriction::restricted_to([gender]);
        self
    }

    pub fn max_income(mut self, max: u64) -> Self {
        self.eligibility.max_income = Some(max);
        self
    }

    pub fn education(mut self, levels: &[&str]) -> Self {
        self.eligibility.education_levels = levels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn build(self) -> Entity {
        Entity {
            description: self.description,
            status: self.status,
            kind: self.kind,
            eligibility: self.eligibility,
            ..Entity::new(self.id, self.name)
        }
    }
}

/// A small catalog with one entity per interesting shape.
pub fn sample_catalog() -> Vec<Entity> {
    vec![
        EntityBuilder::new("kerala-girls")
            .description("Support for girls studying engineering in Kerala")
            .states(&["Kerala"])
            .gender("female")
            .education(&["undergraduate"])
            .build(),
        EntityBuilder::new("national-merit")
            .description("Merit scholarship open to all students across India")
            .max_income(800_000)
            .build(),
        EntityBuilder::new("sc-st-postmatric")
            .description("Post matric support for SC and ST students")
            .categories(&["SC", "ST"])
            .max_income(250_000)
            .build(),
        EntityBuilder::new("draft")
            .description("Pending moderation")
            .status(EntityStatus::Pending)
            .build(),
    ]
}

pub fn kerala_student() -> ProfileInput {
    ProfileInput {
        state: Some("Kerala".to_string()),
        category: Some("OBC".to_string()),
        income: Some(IncomeInput::Text("180000".to_string())),
        education_level: Some("undergraduate".to_string()),
        gender: Some("female".to_string()),
        ..Default::default()
    }
}

pub async fn write_catalog(path: &Path, entities: &[Entity]) {
    let bytes = serde_json::to_vec_pretty(entities).expect("catalog should serialize");
    tokio::fs::write(path, bytes)
        .await
        .expect("catalog should be written");
}
