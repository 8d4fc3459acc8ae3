use std::sync::Arc;

use tracing::instrument;

use super::error::RankingError;
use super::ranker::HybridRanker;
use super::types::{RankingRequest, RankingResponse};
use crate::catalog::Catalog;
use crate::profile::Profile;

/// Request entry point: parse the profile, load approved entities, rank.
pub struct Recommender {
    catalog: Arc<dyn Catalog>,
    ranker: HybridRanker,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn Catalog>, ranker: HybridRanker) -> Self {
        Self { catalog, ranker }
    }

    pub fn ranker(&self) -> &HybridRanker {
        &self.ranker
    }

    /// Fails only on a malformed profile or an unreachable catalog.
    #[instrument(skip(self, request), fields(use_semantic = request.use_semantic_matching))]
    pub async fn recommend(
        &self,
        request: RankingRequest,
    ) -> Result<RankingResponse, RankingError> {
        let profile = Profile::try_from(request.profile)?;
        let entities = self.catalog.list_approved().await?;
        Ok(self
            .ranker
            .rank(&profile, &entities, request.use_semantic_matching)
            .await)
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("ranker", &self.ranker)
            .finish_non_exhaustive()
    }
}
