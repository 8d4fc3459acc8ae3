//! Score arithmetic shared by the primary list and suggestions.

use crate::constants::{
    FUSION_ELIGIBILITY_WEIGHT, FUSION_SEMANTIC_WEIGHT, GOOD_SEMANTIC_THRESHOLD,
    STRONG_SEMANTIC_THRESHOLD,
};

/// Cosine similarity to a 0-100 score. Negative similarity floors at 0.
pub fn semantic_score(similarity: f32) -> u32 {
    (f64::from(similarity.clamp(0.0, 1.0)) * 100.0).round() as u32
}

/// `round(0.7 * eligibility + 0.3 * semantic)`.
pub fn fuse_scores(eligibility: u32, semantic: u32) -> u32 {
    (FUSION_ELIGIBILITY_WEIGHT * f64::from(eligibility)
        + FUSION_SEMANTIC_WEIGHT * f64::from(semantic))
    .round() as u32
}

/// Explanation for a semantic score, if it is high enough to mention.
pub fn semantic_reason(score: u32) -> Option<String> {
    if score >= STRONG_SEMANTIC_THRESHOLD {
        Some(format!("Strong match with your profile ({score}% similar)"))
    } else if score >= GOOD_SEMANTIC_THRESHOLD {
        Some(format!("Good match with your profile ({score}% similar)"))
    } else {
        None
    }
}
