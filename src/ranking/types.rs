use serde::{Deserialize, Serialize};

use crate::profile::ProfileInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether semantic scores contributed to a response.
pub enum Strategy {
    Hybrid,
    RuleBased,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Hybrid => "hybrid",
            Strategy::RuleBased => "rule-based",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked entity with its score breakdown.
///
/// Under [`Strategy::RuleBased`] only `match_score` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub entity_id: String,
    pub entity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_score: Option<u32>,
    pub match_score: u32,
    #[serde(default)]
    pub match_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRequest {
    #[serde(default)]
    pub profile: ProfileInput,
    #[serde(default)]
    pub use_semantic_matching: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub results: Vec<ScoredResult>,
    /// Semantically close entities that missed the primary list.
    pub suggestions: Vec<ScoredResult>,
    pub total: usize,
    pub strategy: Strategy,
}
