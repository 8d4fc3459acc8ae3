//! Entity → embedding text, plus the content hash used for staleness checks.
//!
//! Restrictive eligibility is spelled out with synonyms so a profile phrased one way
//! still lands near an offer phrased another way. Open ("all") dimensions are mostly
//! omitted; only states and categories describe their universal case, since "available
//! nationwide" is itself useful signal.

use super::income::IncomeBracket;
use super::vocabulary::{
    expand_area, expand_category, expand_education, expand_gender, join_natural,
};
use crate::catalog::{Entity, Restriction};
use crate::hashing::content_hash;

pub fn render_entity(entity: &Entity) -> String {
    let eligibility = &entity.eligibility;
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "{}. A {} scholarship.",
        entity.name.trim(),
        entity.kind.as_str()
    ));

    let description = entity.description.trim();
    if !description.is_empty() {
        sections.push(description.to_string());
    }

    match &eligibility.states {
        Restriction::Universal => sections.push(
            "Available to students from all states across India, a nationwide scholarship."
                .to_string(),
        ),
        Restriction::RestrictedTo(states) => {
            sections.push(format!("Available for students from {}.", states.join(", ")));
            sections.push(format!(
                "For residents and domicile holders of {}.",
                join_natural(states)
            ));
        }
    }

    match &eligibility.categories {
        Restriction::Universal => sections.push(
            "Open to students of all categories including General, SC, ST and OBC.".to_string(),
        ),
        Restriction::RestrictedTo(categories) => {
            for category in categories {
                sections.push(format!(
                    "Reserved for {} students.",
                    expand_category(category)
                ));
            }
        }
    }

    match eligibility.max_income {
        Some(max) => sections.push(format!(
            "For students with annual family income up to {max} rupees, {}.",
            IncomeBracket::for_income(max).label()
        )),
        None => sections.push("No income limit, open to all income groups.".to_string()),
    }

    if !eligibility.education_levels.is_empty() {
        let levels: Vec<String> = eligibility
            .education_levels
            .iter()
            .map(|level| expand_education(level))
            .collect();
        sections.push(format!("For students studying {}.", levels.join("; ")));
    }

    if let Restriction::RestrictedTo(genders) = &eligibility.gender {
        let genders: Vec<String> = genders.iter().map(|g| expand_gender(g)).collect();
        sections.push(format!("Exclusively for {}.", join_natural(&genders)));
    }

    if eligibility.disability_required {
        sections.push(
            "For students with disabilities (PwD, differently abled, specially abled).".to_string(),
        );
    }

    if let Restriction::RestrictedTo(religions) = &eligibility.religion {
        sections.push(format!(
            "For students from the {} community.",
            join_natural(religions)
        ));
    }

    if let Restriction::RestrictedTo(areas) = &eligibility.area {
        let areas: Vec<String> = areas.iter().map(|a| expand_area(a)).collect();
        sections.push(format!("For students living in {}.", join_natural(&areas)));
    }

    if let Restriction::RestrictedTo(courses) = &eligibility.courses {
        sections.push(format!("For students pursuing {}.", join_natural(courses)));
    }

    let benefits = entity.benefits.trim().trim_end_matches('.');
    if !benefits.is_empty() {
        sections.push(format!("Benefits: {benefits}."));
    }

    sections.join(" ")
}

/// Hash of [`render_entity`] output.
pub fn entity_content_hash(entity: &Entity) -> String {
    content_hash(&render_entity(entity))
}
