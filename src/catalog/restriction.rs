use serde::{Deserialize, Serialize};

/// Sentinel used by catalog data to mean "open to everyone".
pub const WILDCARD: &str = "all";

/// One eligibility dimension: open to everyone, or limited to listed values.
///
/// Catalog JSON encodes this as a string or a list of strings, with `"all"` as the
/// wildcard. A missing, null or empty value is treated as [`Restriction::Universal`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<RawRestriction>", into = "Vec<String>")]
pub enum Restriction {
    #[default]
    Universal,
    RestrictedTo(Vec<String>),
}

impl Restriction {
    pub fn universal() -> Self {
        Self::Universal
    }

    /// Builds a restriction from raw values, folding the wildcard into [`Restriction::Universal`].
    pub fn restricted_to<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.into().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() || values.iter().any(|v| v.eq_ignore_ascii_case(WILDCARD)) {
            Self::Universal
        } else {
            Self::RestrictedTo(values)
        }
    }

    #[inline]
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Universal)
    }

    /// Returns `true` if `value` passes this restriction (ASCII case-insensitive).
    pub fn allows(&self, value: &str) -> bool {
        match self {
            Self::Universal => true,
            Self::RestrictedTo(values) => values.iter().any(|v| v.eq_ignore_ascii_case(value)),
        }
    }

    /// Returns `true` only for a restricted dimension that lists `value`.
    pub fn lists(&self, value: &str) -> bool {
        !self.is_universal() && self.allows(value)
    }

    /// Listed values; empty for [`Restriction::Universal`].
    pub fn values(&self) -> &[String] {
        match self {
            Self::Universal => &[],
            Self::RestrictedTo(values) => values,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRestriction {
    One(String),
    Many(Vec<String>),
}

impl From<Option<RawRestriction>> for Restriction {
    fn from(raw: Option<RawRestriction>) -> Self {
        match raw {
            None => Self::Universal,
            Some(RawRestriction::One(value)) => Self::restricted_to([value]),
            Some(RawRestriction::Many(values)) => Self::restricted_to(values),
        }
    }
}

impl From<Restriction> for Vec<String> {
    fn from(restriction: Restriction) -> Self {
        match restriction {
            Restriction::Universal => vec![WILDCARD.to_string()],
            Restriction::RestrictedTo(values) => values,
        }
    }
}
