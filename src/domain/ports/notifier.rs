//! Completion Notifier Port
//!
//! Defines the interface for signaling a stored outcome to a remote system.

use async_trait::async_trait;

/// Best-effort completion signal for a finished resolution.
///
/// Implementations must swallow their own failures: the queue consumer
/// awaits `notify` but never branches on its outcome, so the trait
/// returns nothing.
#[async_trait]
pub trait CompletionNotifier: Send + Sync {
    /// Signal that the outcome for `uuid` is ready to be collected.
    async fn notify(&self, uuid: &str);
}
