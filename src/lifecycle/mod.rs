//! Embedding lifecycle: generation, replacement, staleness and removal of entity
//! embeddings, plus a background worker fed by catalog changes.

pub mod config;
pub mod error;
pub mod manager;
pub mod task;
pub mod worker;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_LIFECYCLE_QUEUE, LifecycleConfig};
pub use error::{LifecycleError, LifecycleResult};
pub use manager::EmbeddingLifecycleManager;
pub use task::{LifecycleFailure, LifecycleTask, SyncReport, WorkerStats};
pub use worker::{LifecycleHandle, LifecycleWorker};
