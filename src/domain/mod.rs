//! Domain Layer - Core business logic and interfaces

pub mod entities;
pub mod errors;
pub mod ports;
