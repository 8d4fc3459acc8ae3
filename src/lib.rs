//! Scholar library crate: hybrid scholarship recommendation (used by the CLI and
//! integration tests).
//!
//! # Public API Surface
//!
//! ## Entry Points
//! - [`Recommender`] - parse a [`RankingRequest`], load the catalog, rank
//! - [`HybridRanker`] - eligibility scores fused with semantic similarity
//! - [`EmbeddingLifecycleManager`], [`LifecycleWorker`] - keep entity embeddings in sync
//!
//! ## Scoring
//! - [`score_eligibility`], [`eligibility_warnings`] - rule-based matching
//! - [`cosine_similarity`], [`top_k`] - vector math
//! - [`render_profile`], [`render_entity`] - text fed to the embedding provider
//!
//! ## Collaborators
//! - [`Catalog`] with [`InMemoryCatalog`] and [`JsonFileCatalog`]
//! - [`EmbeddingProvider`] with [`HttpEmbeddingProvider`] and [`HashEmbeddingProvider`]
//! - [`EmbeddingStore`] with [`InMemoryEmbeddingStore`] and [`JsonFileEmbeddingStore`]
//! - [`ProfileEmbeddingCache`] - TTL cache of profile vectors
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod eligibility;
pub mod embedding;
pub mod encoding;
pub mod hashing;
pub mod lifecycle;
pub mod profile;
pub mod ranking;
pub mod store;
pub mod vector;

pub use cache::{ProfileEmbeddingCache, ProfileEmbeddingCacheHandle};
pub use catalog::{
    Catalog, CatalogError, CatalogEvent, Eligibility, Entity, EntityKind, EntityStatus,
    InMemoryCatalog, JsonFileCatalog, Restriction,
};
pub use config::{Config, ConfigError};
pub use eligibility::{EligibilityScore, eligibility_warnings, score_eligibility};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbeddingProvider;
pub use embedding::{
    EmbeddingError, EmbeddingProvider, HashEmbeddingProvider, HttpEmbeddingConfig,
    HttpEmbeddingProvider,
};
pub use encoding::{
    IncomeBracket, entity_content_hash, profile_cache_key, render_entity, render_profile,
};
pub use hashing::{content_hash, hash_salted};
pub use lifecycle::{
    EmbeddingLifecycleManager, LifecycleConfig, LifecycleError, LifecycleFailure,
    LifecycleHandle, LifecycleResult, LifecycleTask, LifecycleWorker, SyncReport, WorkerStats,
};
pub use profile::{IncomeInput, Profile, ProfileError, ProfileInput};
pub use ranking::{
    HybridRanker, RankingConfig, RankingError, RankingRequest, RankingResponse, Recommender,
    ScoredResult, Strategy,
};
#[cfg(any(test, feature = "mock"))]
pub use store::MockEmbeddingStore;
pub use store::{
    EmbeddingRecord, EmbeddingStore, InMemoryEmbeddingStore, JsonFileEmbeddingStore, StoreError,
    StoreResult,
};
pub use vector::{VectorError, cosine_similarity, top_k};
