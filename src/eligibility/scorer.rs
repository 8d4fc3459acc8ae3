use crate::catalog::{Entity, Restriction};
use crate::constants::{
    WEIGHT_AREA, WEIGHT_CATEGORY, WEIGHT_COURSE, WEIGHT_DISABILITY, WEIGHT_EDUCATION,
    WEIGHT_GENDER, WEIGHT_INCOME, WEIGHT_RELIGION, WEIGHT_STATE_GENERAL, WEIGHT_STATE_SPECIFIC,
};
use crate::profile::Profile;

use super::types::EligibilityScore;

/// Scores `profile` against `entity`'s eligibility. Pure.
pub fn score_eligibility(profile: &Profile, entity: &Entity) -> EligibilityScore {
    let rules = &entity.eligibility;
    let mut result = EligibilityScore::default();

    if let Some(state) = &profile.state {
        match &rules.states {
            Restriction::Universal => result.credit(WEIGHT_STATE_GENERAL, None),
            Restriction::RestrictedTo(states)
                if states.len() == 1 && states[0].eq_ignore_ascii_case(state) =>
            {
                result.credit(
                    WEIGHT_STATE_SPECIFIC,
                    Some(format!("Specifically for students from {state}")),
                );
            }
            restricted if restricted.allows(state) => {
                result.credit(WEIGHT_STATE_GENERAL, Some(format!("Available in {state}")));
            }
            _ => {}
        }
    }

    if let Some(category) = &profile.category {
        score_restriction(
            &mut result,
            &rules.categories,
            category,
            WEIGHT_CATEGORY,
            || format!("Matches your category ({category})"),
        );
    }

    if let Some(income) = profile.income {
        match rules.max_income {
            None => result.credit(WEIGHT_INCOME, None),
            Some(max) if income <= max => result.credit(
                WEIGHT_INCOME,
                Some(format!("Within income limit (up to {max})")),
            ),
            Some(_) => {}
        }
    }

    if let Some(level) = &profile.education_level {
        let matched = rules
            .education_levels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(level));
        if matched {
            result.credit(
                WEIGHT_EDUCATION,
                Some(format!("Matches your education level ({level})")),
            );
        }
    }

    if let Some(gender) = &profile.gender {
        score_restriction(&mut result, &rules.gender, gender, WEIGHT_GENDER, || {
            format!("Scholarship for {gender} students")
        });
    }

    if let Some(has_disability) = profile.disability {
        if !rules.disability_required {
            result.credit(WEIGHT_DISABILITY, None);
        } else if has_disability {
            result.credit(
                WEIGHT_DISABILITY,
                Some("Reserved for students with disabilities".to_string()),
            );
        }
    }

    if let Some(religion) = &profile.religion {
        score_restriction(&mut result, &rules.religion, religion, WEIGHT_RELIGION, || {
            format!("For the {religion} community")
        });
    }

    if let Some(area) = &profile.area {
        score_restriction(&mut result, &rules.area, area, WEIGHT_AREA, || {
            format!("For students in {area} areas")
        });
    }

    if let Some(course) = &profile.course {
        score_restriction(&mut result, &rules.courses, course, WEIGHT_COURSE, || {
            format!("Matches your course ({course})")
        });
    }

    result
}

fn score_restriction(
    result: &mut EligibilityScore,
    restriction: &Restriction,
    value: &str,
    weight: u32,
    reason: impl FnOnce() -> String,
) {
    if restriction.is_universal() {
        result.credit(weight, None);
    } else if restriction.allows(value) {
        result.credit(weight, Some(reason()));
    }
}
