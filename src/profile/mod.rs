//! Student profile: the request-shaped [`ProfileInput`] and the validated [`Profile`].


use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("income must be a non-negative whole number, got '{value}'")]
    InvalidIncome { value: String },
}

/// Income as sent by clients: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncomeInput {
    Amount(u64),
    Text(String),
}

/// Profile fields exactly as received with a ranking request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub state: Option<String>,
    pub category: Option<String>,
    pub income: Option<IncomeInput>,
    pub education_level: Option<String>,
    pub gender: Option<String>,
    pub disability: Option<bool>,
    pub religion: Option<String>,
    pub area: Option<String>,
    pub course: Option<String>,
}

/// Validated student profile. `None` means "do not score this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub state: Option<String>,
    pub category: Option<String>,
    pub income: Option<u64>,
    pub education_level: Option<String>,
    pub gender: Option<String>,
    pub disability: Option<bool>,
    pub religion: Option<String>,
    pub area: Option<String>,
    pub course: Option<String>,
}

impl Profile {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
            && self.category.is_none()
            && self.income.is_none()
            && self.education_level.is_none()
            && self.gender.is_none()
            && self.disability.is_none()
            && self.religion.is_none()
            && self.area.is_none()
            && self.course.is_none()
    }
}

impl TryFrom<ProfileInput> for Profile {
    type Error = ProfileError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        let income = match input.income {
            None => None,
            Some(IncomeInput::Amount(amount)) => Some(amount),
            Some(IncomeInput::Text(text)) => parse_income(&text)?,
        };

        Ok(Self {
            state: normalize(input.state),
            category: normalize(input.category),
            income,
            education_level: normalize(input.education_level),
            gender: normalize(input.gender),
            disability: input.disability,
            religion: normalize(input.religion),
            area: normalize(input.area),
            course: normalize(input.course),
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_income(text: &str) -> Result<Option<u64>, ProfileError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ProfileError::InvalidIncome {
            value: text.to_string(),
        })
}
