use thiserror::Error;

use crate::catalog::CatalogError;
use crate::profile::ProfileError;

/// Failures that abort a ranking request.
///
/// Semantic matching problems never surface here; they downgrade the strategy.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("malformed profile: {0}")]
    MalformedInput(#[from] ProfileError),

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}
