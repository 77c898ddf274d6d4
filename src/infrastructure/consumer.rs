//! Queue Consumer
//!
//! The single background task that drains the work queue: one item per
//! cycle, resolve then store then notify, then sleep the poll interval.

use crate::application::ResolverService;
use crate::domain::ports::CompletionNotifier;
use crate::infrastructure::queue::{ResultTable, WorkQueue};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Single-consumer polling loop over the work queue.
///
/// Exactly one consumer runs per process, so no two resolutions are ever
/// in flight at once and outcomes land in the result table in enqueue
/// order. The interval throttles idle polling; an active cycle sleeps the
/// same interval measured from the moment its work (including the webhook
/// ping) finished.
pub struct QueueConsumer {
    queue: Arc<WorkQueue>,
    results: Arc<ResultTable>,
    resolver: Arc<ResolverService>,
    notifier: Arc<dyn CompletionNotifier>,
    poll_interval: Duration,
}

impl QueueConsumer {
    pub fn new(
        queue: Arc<WorkQueue>,
        results: Arc<ResultTable>,
        resolver: Arc<ResolverService>,
        notifier: Arc<dyn CompletionNotifier>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            queue,
            results,
            resolver,
            notifier,
            poll_interval,
        }
    }

    /// Process at most one queued request. Returns whether an item was
    /// dequeued. Never fails: engine errors become `Failed` outcomes and
    /// notifier errors are the notifier's problem.
    pub async fn poll_once(&self) -> bool {
        let Some(request) = self.queue.dequeue_front() else {
            return false;
        };

        tracing::info!("resolving ASNs for [{}] {}", request.uuid, request.ip);

        let outcome = self.resolver.resolve(&request.ip).await;
        if outcome.is_failed() {
            tracing::warn!("resolution for [{}] stored as failure", request.uuid);
        }

        // The result must be visible before the remote side is pinged,
        // so a webhook-triggered fetch never misses.
        self.results.put(request.uuid.clone(), outcome);
        self.notifier.notify(&request.uuid).await;

        true
    }

    /// Spawn the perpetual drain loop.
    ///
    /// No retries and no timeouts: a failed resolution is stored as-is,
    /// and a hung store query or webhook call stalls the loop
    /// indefinitely.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                self.poll_once().await;
                sleep(self.poll_interval).await;
            }
        })
    }
}
