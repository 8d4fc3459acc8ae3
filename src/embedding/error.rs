use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("embedding provider timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("invalid embedding response: {reason}")]
    InvalidResponse { reason: String },

    #[error("cannot embed empty text")]
    EmptyInput,
}

impl EmbeddingError {
    /// Returns `true` for failures of the provider itself (network, quota, timeout).
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            EmbeddingError::ProviderUnavailable { .. } | EmbeddingError::Timeout { .. }
        )
    }
}
