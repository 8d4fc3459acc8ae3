//! Vector math: cosine similarity and top-K selection.
//!
//! Both functions fail fast on a dimension mismatch. A mismatch means two
//! embeddings from different models were mixed, which no amount of scoring can fix.


use std::cmp::Ordering;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Cosine similarity in `[-1, 1]`; `0.0` if either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Scores `query` against every record and returns the best `k` as `(id, score)`.
///
/// Ordering is non-increasing by score. Records with equal scores keep their input
/// order (the sort is stable), so callers that pass records in catalog order get
/// catalog order as the tie-break.
pub fn top_k<'a, I, K>(query: &[f32], records: I, k: usize) -> Result<Vec<(K, f32)>, VectorError>
where
    I: IntoIterator<Item = (K, &'a [f32])>,
{
    let mut scored = records
        .into_iter()
        .map(|(id, vector)| cosine_similarity(query, vector).map(|score| (id, score)))
        .collect::<Result<Vec<_>, _>>()?;

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(k);

    Ok(scored)
}
