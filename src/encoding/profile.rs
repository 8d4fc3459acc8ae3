//! Profile → embedding text, and profile → cache key.

use super::income::IncomeBracket;
use super::vocabulary::{expand_area, expand_category, expand_education};
use crate::profile::Profile;

/// Rendering of a profile with no fields set. Providers reject empty input.
pub const EMPTY_PROFILE_TEXT: &str = "Student seeking general scholarship opportunities.";

/// Separator between fields of a profile cache key.
pub const PROFILE_KEY_DELIMITER: char = '|';

/// Renders one descriptive clause per present profile field.
pub fn render_profile(profile: &Profile) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if let Some(state) = &profile.state {
        clauses.push(format!("Student from {state}, India."));
    }
    if let Some(category) = &profile.category {
        clauses.push(format!(
            "Belongs to the {} category.",
            expand_category(category)
        ));
    }
    if let Some(income) = profile.income {
        clauses.push(format!(
            "Annual family income of {income} rupees, {}.",
            IncomeBracket::for_income(income).label()
        ));
    }
    if let Some(level) = &profile.education_level {
        clauses.push(format!(
            "Currently studying at {level} level ({}).",
            expand_education(level)
        ));
    }
    if let Some(gender) = &profile.gender {
        clauses.push(format!("Gender: {gender}."));
    }
    match profile.disability {
        Some(true) => {
            clauses.push("Person with disability (PwD), differently abled student.".to_string())
        }
        Some(false) => clauses.push("Student without a disability.".to_string()),
        None => {}
    }
    if let Some(religion) = &profile.religion {
        clauses.push(format!("Religion: {religion}."));
    }
    if let Some(area) = &profile.area {
        clauses.push(format!("Lives in {}.", expand_area(area)));
    }
    if let Some(course) = &profile.course {
        clauses.push(format!("Pursuing {course}."));
    }

    if clauses.is_empty() {
        return EMPTY_PROFILE_TEXT.to_string();
    }
    clauses.join(" ")
}

/// Deterministic key over every profile field in fixed order.
///
/// Absent fields contribute an empty segment and disability is `1`/`0`, so two
/// profiles share a key exactly when all their fields are equal.
pub fn profile_cache_key(profile: &Profile) -> String {
    let income = profile.income.map(|i| i.to_string()).unwrap_or_default();
    let disability = match profile.disability {
        Some(true) => "1",
        Some(false) => "0",
        None => "",
    };

    let fields: [&str; 9] = [
        profile.state.as_deref().unwrap_or(""),
        profile.category.as_deref().unwrap_or(""),
        &income,
        profile.education_level.as_deref().unwrap_or(""),
        profile.gender.as_deref().unwrap_or(""),
        disability,
        profile.religion.as_deref().unwrap_or(""),
        profile.area.as_deref().unwrap_or(""),
        profile.course.as_deref().unwrap_or(""),
    ];

    let mut key = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push(PROFILE_KEY_DELIMITER);
        }
        key.push_str(field);
    }
    key
}
