//! Inbound Adapters - Entry points into the application

mod api_server;

pub use api_server::{router, ApiServer, ApiState};
