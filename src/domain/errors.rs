//! Lookup error taxonomy.
//!
//! Every variant ends up as the `error`/`msg` text of a `Failed` outcome,
//! so the Display strings are part of the API contract.

/// Failure modes of a resolution attempt.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// The address text is not a valid dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// No block in the dataset covers the address.
    #[error("no coverage for address")]
    NoCoverage,

    /// The underlying store query failed.
    #[error("lookup store failure: {0}")]
    Store(String),
}
