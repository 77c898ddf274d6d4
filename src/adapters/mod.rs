//! Adapters Layer - Inbound and outbound implementations

pub mod inbound;
pub mod outbound;
