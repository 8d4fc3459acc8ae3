use std::time::Duration;

use crate::constants::{DEFAULT_PROVIDER_TIMEOUT, EMBEDDING_SCHEMA_VERSION};

/// Default capacity of the lifecycle task queue.
pub const DEFAULT_LIFECYCLE_QUEUE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Embedding lifecycle settings.
pub struct LifecycleConfig {
    /// Version stamped on new records. Records with another version are stale.
    pub schema_version: u32,
    /// Bound on queued tasks before submitters see [`super::LifecycleError::QueueFull`].
    pub queue_capacity: usize,
    /// Bound on one provider call during generation.
    pub provider_timeout: Duration,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            schema_version: EMBEDDING_SCHEMA_VERSION,
            queue_capacity: DEFAULT_LIFECYCLE_QUEUE,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl LifecycleConfig {
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }
}
