//! Infrastructure Layer - Queue machinery shared by the API and the consumer

pub mod consumer;
pub mod queue;

pub use consumer::QueueConsumer;
pub use queue::{ResultTable, WorkQueue};
