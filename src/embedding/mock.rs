use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::EmbeddingProvider;
use super::error::EmbeddingError;
use super::hash::HashEmbeddingProvider;

/// Test provider: hashing embedder plus call counting, canned vectors and failure modes.
#[derive(Debug, Default)]
pub struct MockEmbeddingProvider {
    inner: HashEmbeddingProvider,
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
    fixed: Mutex<Option<Vec<f32>>>,
}

impl MockEmbeddingProvider {
    pub const MODEL_ID: &'static str = "mock-embedder";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            inner: HashEmbeddingProvider::new(dimension),
            ..Default::default()
        }
    }

    /// Number of `embed` calls so far, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// While set, every call fails with [`EmbeddingError::ProviderUnavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Sleeps for `delay` before answering.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock() = delay;
    }

    /// Returns `vector` for every text instead of hashing it.
    pub fn respond_with(&self, vector: Option<Vec<f32>>) {
        *self.fixed.lock() = vector;
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    fn model_id(&self) -> &str {
        Self::MODEL_ID
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(EmbeddingError::ProviderUnavailable {
                reason: "mock provider set to fail".to_string(),
            });
        }

        let fixed = self.fixed.lock().clone();
        match fixed {
            Some(vector) if !text.trim().is_empty() => Ok(vector),
            _ => self.inner.embed_sync(text),
        }
    }
}
