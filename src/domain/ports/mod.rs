//! Ports - Interfaces between the domain and the outside world
//!
//! Outbound ports abstract the dataset store and the webhook target so
//! the engine and the consumer can be exercised against fakes in tests.

mod lookup_store;
mod notifier;

pub use lookup_store::LookupStore;
pub use notifier::CompletionNotifier;
