//! Lookup Store Port
//!
//! Defines the interface for the read-only range dataset.
//! Implementations may use SQLite or in-memory storage (tests).

use crate::domain::entities::{AsnRecord, Ipv4Block};
use crate::domain::errors::LookupError;
use async_trait::async_trait;

/// Read-only access to the ipv4/asn dataset.
///
/// The resolution engine depends only on these two query shapes, not on
/// any particular storage engine. Both queries are side-effect free and
/// safe to run concurrently.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// All blocks whose range covers the given integer address,
    /// in the store's default order.
    async fn blocks_covering(&self, ip: u32) -> Result<Vec<Ipv4Block>, LookupError>;

    /// All ASN rows for the given owning-entity id.
    async fn asn_records(&self, entity_id: i64) -> Result<Vec<AsnRecord>, LookupError>;
}
