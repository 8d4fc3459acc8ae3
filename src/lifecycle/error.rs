use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error(transparent)]
    Provider(#[from] EmbeddingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("lifecycle queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("lifecycle worker has stopped")]
    WorkerStopped,
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
