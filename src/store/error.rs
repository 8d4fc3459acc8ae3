use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("embedding store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("embedding store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("embedding store data is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
