//! Synonym tables shared by the profile and entity encoders.

/// Expands an education level into the phrasings students and offers use for it.
pub fn education_synonyms(level: &str) -> Option<&'static str> {
    let synonyms = match level.trim().to_ascii_lowercase().as_str() {
        "10th" | "class 10" | "secondary" | "ssc" | "matriculation" => {
            "class 10, 10th standard, secondary school, SSC, matriculation"
        }
        "12th" | "class 12" | "higher secondary" | "hsc" | "intermediate" => {
            "class 12, 12th standard, higher secondary, HSC, intermediate, pre-university"
        }
        "diploma" | "polytechnic" => "diploma, polytechnic, vocational course",
        "undergraduate" | "ug" | "graduation" | "bachelor" | "bachelors" => {
            "undergraduate, bachelor degree, UG, graduation, college degree"
        }
        "postgraduate" | "pg" | "post graduation" | "master" | "masters" => {
            "postgraduate, master degree, PG, post graduation, masters"
        }
        "phd" | "doctorate" | "doctoral" => {
            "PhD, doctorate, doctoral research, research scholar"
        }
        _ => return None,
    };
    Some(synonyms)
}

/// Education level with its synonyms, or the level itself when unknown.
pub fn expand_education(level: &str) -> String {
    match education_synonyms(level) {
        Some(synonyms) => synonyms.to_string(),
        None => level.trim().to_string(),
    }
}

/// Full name of a reservation category, or the category itself when unknown.
pub fn expand_category(category: &str) -> String {
    let expanded = match category.trim().to_ascii_lowercase().as_str() {
        "sc" => "Scheduled Caste (SC)",
        "st" => "Scheduled Tribe (ST)",
        "obc" => "Other Backward Classes (OBC)",
        "general" | "gen" => "General category",
        "ews" => "Economically Weaker Section (EWS)",
        "minority" => "minority community",
        _ => return category.trim().to_string(),
    };
    expanded.to_string()
}

pub fn expand_gender(gender: &str) -> String {
    let expanded = match gender.trim().to_ascii_lowercase().as_str() {
        "female" | "girl" | "woman" => "female students, girls and women",
        "male" | "boy" | "man" => "male students, boys and men",
        "transgender" | "other" => "transgender and non-binary students",
        _ => return format!("{} students", gender.trim()),
    };
    expanded.to_string()
}

pub fn expand_area(area: &str) -> String {
    let expanded = match area.trim().to_ascii_lowercase().as_str() {
        "rural" => "rural areas and villages",
        "urban" => "urban areas and cities",
        _ => return format!("{} areas", area.trim()),
    };
    expanded.to_string()
}

/// Joins items as "a, b and c".
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
