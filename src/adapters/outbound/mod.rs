//! Outbound Adapters - Implementations of the domain's outbound ports

mod sqlite_lookup_store;
mod webhook_notifier;

pub use sqlite_lookup_store::SqliteLookupStore;
pub use webhook_notifier::WebhookNotifier;
