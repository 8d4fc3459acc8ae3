use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, info, instrument, warn};

use super::fusion::{fuse_scores, semantic_reason, semantic_score};
use super::types::{RankingResponse, ScoredResult, Strategy};
use crate::cache::ProfileEmbeddingCacheHandle;
use crate::catalog::Entity;
use crate::constants::{
    DEFAULT_PROVIDER_TIMEOUT, DEFAULT_STORE_TIMEOUT, MAX_RESULTS, MAX_SUGGESTIONS,
    MIN_MATCH_SCORE, MIN_SUGGESTION_SCORE,
};
use crate::eligibility::{eligibility_warnings, score_eligibility};
use crate::profile::Profile;
use crate::store::EmbeddingStore;
use crate::vector::cosine_similarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timeouts applied to the ranker's I/O.
pub struct RankingConfig {
    /// Bound on obtaining the profile vector (cache miss included).
    pub provider_timeout: Duration,
    /// Bound on each per-entity store read.
    pub store_timeout: Duration,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

/// Ranks approved entities for a profile.
///
/// Semantic scoring is best effort. A missing profile vector, or no stored entity
/// vectors at all, yields a [`Strategy::RuleBased`] response instead of an error.
pub struct HybridRanker {
    cache: ProfileEmbeddingCacheHandle,
    store: Arc<dyn EmbeddingStore>,
    config: RankingConfig,
}

impl HybridRanker {
    pub fn new(
        cache: ProfileEmbeddingCacheHandle,
        store: Arc<dyn EmbeddingStore>,
        config: RankingConfig,
    ) -> Self {
        Self {
            cache,
            store,
            config,
        }
    }

    pub fn cache(&self) -> &ProfileEmbeddingCacheHandle {
        &self.cache
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    #[instrument(skip(self, profile, entities), fields(candidates = entities.len()))]
    pub async fn rank(
        &self,
        profile: &Profile,
        entities: &[Entity],
        use_semantic: bool,
    ) -> RankingResponse {
        let candidates: Vec<&Entity> = entities.iter().filter(|e| e.is_approved()).collect();

        let semantic = if use_semantic {
            self.semantic_scores(profile, &candidates).await
        } else {
            None
        };
        let semantic = semantic.filter(|scores| scores.iter().any(Option::is_some));
        let strategy = if semantic.is_some() {
            Strategy::Hybrid
        } else {
            Strategy::RuleBased
        };

        let mut primary: Vec<(usize, ScoredResult)> = candidates
            .iter()
            .enumerate()
            .map(|(idx, entity)| {
                let semantic = semantic.as_ref().map(|scores| scores[idx]);
                (idx, primary_result(profile, entity, semantic))
            })
            .filter(|(_, result)| result.match_score >= MIN_MATCH_SCORE)
            .collect();
        primary.sort_by_key(|(_, result)| Reverse(result.match_score));
        primary.truncate(MAX_RESULTS);

        let selected: HashSet<usize> = primary.iter().map(|&(idx, _)| idx).collect();
        let suggestions = match &semantic {
            Some(scores) => suggestions(profile, &candidates, scores, &selected),
            None => Vec::new(),
        };

        let results: Vec<ScoredResult> = primary.into_iter().map(|(_, result)| result).collect();

        info!(
            strategy = %strategy,
            results = results.len(),
            suggestions = suggestions.len(),
            "Ranking complete"
        );
        RankingResponse {
            total: results.len(),
            results,
            suggestions,
            strategy,
        }
    }

    /// Per-candidate semantic scores, or `None` when no profile vector was obtained.
    async fn semantic_scores(
        &self,
        profile: &Profile,
        candidates: &[&Entity],
    ) -> Option<Vec<Option<u32>>> {
        let timeout = self.config.provider_timeout;
        let profile_vector =
            match tokio::time::timeout(timeout, self.cache.get_or_compute(profile)).await {
                Ok(Ok(vector)) => vector,
                Ok(Err(error)) => {
                    warn!(
                        error = %error,
                        "Profile embedding unavailable, using rule-based ranking"
                    );
                    return None;
                }
                Err(_) => {
                    warn!(
                        timeout_ms = timeout.as_millis() as u64,
                        "Profile embedding timed out, using rule-based ranking"
                    );
                    return None;
                }
            };

        let vectors = join_all(candidates.iter().map(|e| self.stored_vector(&e.id))).await;

        Some(
            vectors
                .into_iter()
                .zip(candidates)
                .map(|(vector, entity)| {
                    let vector = vector?;
                    match cosine_similarity(&profile_vector, &vector) {
                        Ok(similarity) => Some(semantic_score(similarity)),
                        Err(error) => {
                            warn!(
                                entity_id = %entity.id,
                                error = %error,
                                "Skipping incompatible entity embedding"
                            );
                            None
                        }
                    }
                })
                .collect(),
        )
    }

    async fn stored_vector(&self, entity_id: &str) -> Option<Vec<f32>> {
        let timeout = self.config.store_timeout;
        match tokio::time::timeout(timeout, self.store.get(entity_id)).await {
            Ok(Ok(Some(record))) => Some(record.embedding),
            Ok(Ok(None)) => {
                debug!(entity_id, "No stored embedding");
                None
            }
            Ok(Err(error)) => {
                warn!(entity_id, error = %error, "Embedding store read failed");
                None
            }
            Err(_) => {
                warn!(
                    entity_id,
                    timeout_ms = timeout.as_millis() as u64,
                    "Embedding store read timed out"
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for HybridRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridRanker")
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish()
    }
}

/// `semantic` is `None` for rule-based ranking and `Some(None)` for a hybrid
/// candidate without a usable vector, which fuses as semantic 0.
fn primary_result(
    profile: &Profile,
    entity: &Entity,
    semantic: Option<Option<u32>>,
) -> ScoredResult {
    let eligibility = score_eligibility(profile, entity);

    match semantic {
        None => ScoredResult {
            entity_id: entity.id.clone(),
            entity_name: entity.name.clone(),
            eligibility_score: None,
            semantic_score: None,
            match_score: eligibility.score,
            match_reasons: eligibility.reasons,
            warnings: Vec::new(),
        },
        Some(semantic) => {
            let mut reasons = eligibility.reasons;
            reasons.extend(semantic.and_then(semantic_reason));
            ScoredResult {
                entity_id: entity.id.clone(),
                entity_name: entity.name.clone(),
                eligibility_score: Some(eligibility.score),
                semantic_score: semantic,
                match_score: fuse_scores(eligibility.score, semantic.unwrap_or(0)),
                match_reasons: reasons,
                warnings: Vec::new(),
            }
        }
    }
}

fn suggestions(
    profile: &Profile,
    candidates: &[&Entity],
    scores: &[Option<u32>],
    selected: &HashSet<usize>,
) -> Vec<ScoredResult> {
    let mut picked: Vec<(usize, u32)> = scores
        .iter()
        .enumerate()
        .filter(|(idx, _)| !selected.contains(idx))
        .filter_map(|(idx, score)| score.map(|s| (idx, s)))
        .filter(|&(_, score)| score >= MIN_SUGGESTION_SCORE)
        .collect();
    picked.sort_by_key(|&(_, score)| Reverse(score));
    picked.truncate(MAX_SUGGESTIONS);

    picked
        .into_iter()
        .map(|(idx, score)| {
            let entity = candidates[idx];
            ScoredResult {
                entity_id: entity.id.clone(),
                entity_name: entity.name.clone(),
                eligibility_score: Some(score_eligibility(profile, entity).score),
                semantic_score: Some(score),
                match_score: score,
                match_reasons: Vec::new(),
                warnings: eligibility_warnings(profile, entity),
            }
        })
        .collect()
}
