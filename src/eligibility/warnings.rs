use crate::catalog::{Entity, Restriction};
use crate::constants::WARNING_STATE_PREVIEW;
use crate::profile::Profile;

/// Explains why `profile` may not qualify for `entity`.
///
/// Informational only: used on semantic suggestions, which already failed the
/// primary bar. Covers income, state, gender and category.
pub fn eligibility_warnings(profile: &Profile, entity: &Entity) -> Vec<String> {
    let rules = &entity.eligibility;
    let mut warnings = Vec::new();

    if let (Some(income), Some(max)) = (profile.income, rules.max_income) {
        if income > max {
            warnings.push(format!("Income exceeds the limit of {max}"));
        }
    }

    if let (Some(state), Restriction::RestrictedTo(states)) = (&profile.state, &rules.states) {
        if !rules.states.allows(state) {
            let mut listed = states
                .iter()
                .take(WARNING_STATE_PREVIEW)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if states.len() > WARNING_STATE_PREVIEW {
                listed.push_str("...");
            }
            warnings.push(format!("Only available in {listed}"));
        }
    }

    if let (Some(gender), Restriction::RestrictedTo(genders)) = (&profile.gender, &rules.gender) {
        if !rules.gender.allows(gender) {
            warnings.push(format!("Only for {} students", genders.join("/")));
        }
    }

    if let (Some(category), Restriction::RestrictedTo(categories)) =
        (&profile.category, &rules.categories)
    {
        if !rules.categories.allows(category) {
            warnings.push(format!("Only for {} categories", categories.join(", ")));
        }
    }

    warnings
}
