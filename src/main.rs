//! asn-resolver - IP to ASN resolution service
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;
mod infrastructure;

use crate::adapters::inbound::{ApiServer, ApiState};
use crate::adapters::outbound::{SqliteLookupStore, WebhookNotifier};
use crate::application::ResolverService;
use crate::config::load_config;
use crate::domain::ports::{CompletionNotifier, LookupStore};
use crate::infrastructure::{QueueConsumer, ResultTable, WorkQueue};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!(
        "starting asn-resolver listen={} db={} webhook={}",
        cfg.listen_addr,
        cfg.db_path,
        cfg.webhook_remote
    );

    // ===== COMPOSITION ROOT =====

    // Outbound adapters
    let store: Arc<dyn LookupStore> = Arc::new(SqliteLookupStore::new(cfg.db_path.clone()));
    let notifier: Arc<dyn CompletionNotifier> =
        Arc::new(WebhookNotifier::new(cfg.webhook_remote.clone()));

    // Shared queue machinery and the engine
    let queue = Arc::new(WorkQueue::new());
    let results = Arc::new(ResultTable::new());
    let resolver = Arc::new(ResolverService::new(store));

    // Single queue consumer
    let consumer = QueueConsumer::new(
        queue.clone(),
        results.clone(),
        resolver.clone(),
        notifier,
        Duration::from_millis(cfg.resolve_interval_ms),
    );
    consumer.start();

    // Inbound adapter
    let server = ApiServer::new(
        cfg.listen_addr,
        ApiState {
            queue,
            results,
            resolver,
        },
    );

    server.run().await
}
