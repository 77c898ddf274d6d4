//! asn-resolver Library
//!
//! This module exposes the resolver components for use in integration
//! tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::{router, ApiServer, ApiState};
pub use adapters::outbound::{SqliteLookupStore, WebhookNotifier};
pub use application::ResolverService;
pub use config::load_config;
pub use domain::entities::{AsnRecord, Ipv4Block, ResolveRequest, Resolution};
pub use domain::errors::LookupError;
pub use domain::ports::{CompletionNotifier, LookupStore};
pub use infrastructure::{QueueConsumer, ResultTable, WorkQueue};
