//! Application Layer - Use case orchestration

mod resolver;

pub use resolver::ResolverService;
