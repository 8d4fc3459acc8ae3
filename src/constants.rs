//! Cross-cutting, shared constants.
//!
//! Scoring weights and ranking thresholds are hand-tuned product values. They are kept
//! verbatim here so every module (scorer, ranker, tests) reads the same numbers.

use std::time::Duration;

/// Entity restricted to exactly the profile's state.
pub const WEIGHT_STATE_SPECIFIC: u32 = 25;
/// Universal state availability, or a multi-state list containing the profile's state.
pub const WEIGHT_STATE_GENERAL: u32 = 10;
pub const WEIGHT_CATEGORY: u32 = 20;
pub const WEIGHT_INCOME: u32 = 15;
pub const WEIGHT_EDUCATION: u32 = 15;
pub const WEIGHT_GENDER: u32 = 10;
pub const WEIGHT_DISABILITY: u32 = 5;
pub const WEIGHT_RELIGION: u32 = 5;
pub const WEIGHT_AREA: u32 = 5;
pub const WEIGHT_COURSE: u32 = 10;

/// Highest score the eligibility scorer can produce (every dimension present and matched).
pub const MAX_ELIGIBILITY_SCORE: u32 = WEIGHT_STATE_SPECIFIC
    + WEIGHT_CATEGORY
    + WEIGHT_INCOME
    + WEIGHT_EDUCATION
    + WEIGHT_GENDER
    + WEIGHT_DISABILITY
    + WEIGHT_RELIGION
    + WEIGHT_AREA
    + WEIGHT_COURSE;

/// Share of the fused score taken from the eligibility score.
pub const FUSION_ELIGIBILITY_WEIGHT: f64 = 0.7;
/// Share of the fused score taken from the semantic score.
pub const FUSION_SEMANTIC_WEIGHT: f64 = 0.3;

/// Final scores below this never reach the primary list.
pub const MIN_MATCH_SCORE: u32 = 20;
/// Cap on the primary list.
pub const MAX_RESULTS: usize = 20;

/// Semantic score at which a match is described as strong.
pub const STRONG_SEMANTIC_THRESHOLD: u32 = 60;
/// Semantic score at which a match is described at all.
pub const GOOD_SEMANTIC_THRESHOLD: u32 = 40;

/// Minimum semantic score for the "close but not eligible" suggestion list.
pub const MIN_SUGGESTION_SCORE: u32 = 40;
/// Cap on the suggestion list.
pub const MAX_SUGGESTIONS: usize = 5;

/// Number of allowed states quoted in a state-mismatch warning before eliding the rest.
pub const WARNING_STATE_PREVIEW: usize = 3;

/// Bump when the entity text layout changes so stored embeddings are regenerated.
pub const EMBEDDING_SCHEMA_VERSION: u32 = 2;

/// Lifetime of a cached profile embedding.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Upper bound on a single embedding provider call made while ranking.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on a single embedding store read made while ranking.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Dimension used by the offline hashing embedder.
pub const DEFAULT_EMBEDDING_DIM: usize = 768;
