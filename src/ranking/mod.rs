//! Hybrid ranking: eligibility scores fused with semantic similarity.
//!
//! [`HybridRanker`] scores a candidate set. [`Recommender`] wraps it with profile
//! parsing and catalog access and is the request entry point.

mod error;
pub mod fusion;
pub mod ranker;
mod recommender;
mod types;


pub use error::RankingError;
pub use fusion::{fuse_scores, semantic_reason, semantic_score};
pub use ranker::{HybridRanker, RankingConfig};
pub use recommender::Recommender;
pub use types::{RankingRequest, RankingResponse, ScoredResult, Strategy};
