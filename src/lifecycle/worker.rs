use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use super::error::{LifecycleError, LifecycleResult};
use super::manager::EmbeddingLifecycleManager;
use super::task::{LifecycleFailure, LifecycleTask, WorkerStats};
use crate::catalog::CatalogEvent;

#[derive(Clone, Debug)]
/// Submitting side of a [`LifecycleWorker`]. Cheap to clone.
pub struct LifecycleHandle {
    sender: mpsc::Sender<LifecycleTask>,
    capacity: usize,
}

impl LifecycleHandle {
    /// Queues `task` without waiting.
    pub fn submit(&self, task: LifecycleTask) -> LifecycleResult<()> {
        self.sender.try_send(task).map_err(|e| match e {
            TrySendError::Full(task) => {
                warn!(entity_id = task.entity_id(), action = task.action(), "Lifecycle queue full");
                LifecycleError::QueueFull {
                    capacity: self.capacity,
                }
            }
            TrySendError::Closed(_) => LifecycleError::WorkerStopped,
        })
    }

    /// Queues the task implied by a catalog change. Returns `false` if the event
    /// needs no embedding work.
    pub fn notify(&self, event: CatalogEvent) -> LifecycleResult<bool> {
        match LifecycleTask::from_event(event) {
            Some(task) => self.submit(task).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Background task applying [`LifecycleTask`]s one at a time.
///
/// The worker exits once every [`LifecycleHandle`] is dropped and the queue is
/// drained. Failures are logged and also delivered through [`Self::next_failure`].
pub struct LifecycleWorker {
    failures: mpsc::UnboundedReceiver<LifecycleFailure>,
    join: JoinHandle<WorkerStats>,
}

impl LifecycleWorker {
    pub fn spawn(manager: Arc<EmbeddingLifecycleManager>) -> (LifecycleHandle, Self) {
        let capacity = manager.config().queue_capacity.max(1);
        let (sender, mut tasks) = mpsc::channel::<LifecycleTask>(capacity);
        let (failure_tx, failures) = mpsc::unbounded_channel();

        let join = tokio::spawn(async move {
            let mut stats = WorkerStats::default();
            while let Some(task) = tasks.recv().await {
                match manager.apply(&task).await {
                    Ok(()) => {
                        stats.processed += 1;
                        debug!(
                            entity_id = task.entity_id(),
                            action = task.action(),
                            "Lifecycle task done"
                        );
                    }
                    Err(error) => {
                        stats.failed += 1;
                        warn!(
                            entity_id = task.entity_id(),
                            action = task.action(),
                            error = %error,
                            "Lifecycle task failed"
                        );
                        let _ = failure_tx.send(LifecycleFailure { task, error });
                    }
                }
            }
            info!(processed = stats.processed, failed = stats.failed, "Lifecycle worker stopped");
            stats
        });

        (LifecycleHandle { sender, capacity }, Self { failures, join })
    }

    /// Next reported failure. `None` once the worker has stopped and all failures
    /// were received.
    pub async fn next_failure(&mut self) -> Option<LifecycleFailure> {
        self.failures.recv().await
    }

    pub fn try_next_failure(&mut self) -> Option<LifecycleFailure> {
        self.failures.try_recv().ok()
    }

    /// Waits for the worker to drain its queue and stop.
    pub async fn join(self) -> Result<WorkerStats, JoinError> {
        self.join.await
    }

    /// Stops the worker immediately, dropping queued tasks.
    pub async fn abort(self) {
        self.join.abort();
        let _ = self.join.await;
    }
}
