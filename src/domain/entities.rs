//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the resolver domain.
//! They have no external dependencies beyond serde.

use serde::{Deserialize, Serialize};

/// A pending resolution request submitted via the API.
///
/// The `uuid` is caller-chosen and correlates the submission with the
/// stored outcome and the webhook ping. Requests are immutable once
/// enqueued and are consumed exactly once by the queue consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Caller-supplied opaque identifier
    pub uuid: String,
    /// Raw IPv4 address text (not validated at submit time)
    pub ip: String,
}

/// One row of the `ipv4` table: a contiguous address range owned by an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipv4Block {
    /// Owning-entity identifier, shared with the `asn` table
    pub id: i64,
    /// Range start, dotted quad
    pub ip_start: String,
    /// Range end, dotted quad
    pub ip_end: String,
    /// Range start as a 32-bit integer
    pub ip_start_int: u32,
    /// Range end as a 32-bit integer
    pub ip_end_int: u32,
}

/// One row of the `asn` table. A block's owning entity may announce
/// multiple ASNs (multi-origin), so one block maps to one or more rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsnRecord {
    /// Owning-entity identifier, shared with the `ipv4` table
    pub id: i64,
    /// Autonomous System Number
    pub asn: u32,
    /// Registrant name
    pub name: String,
}

/// Outcome of a resolution, stored per uuid in the result table.
///
/// Serialized untagged: a success renders as `{ip, ipv4, asn}` and a
/// failure as `{ip, error}`, which is the shape the API returns inside
/// its `result` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolution {
    Resolved {
        ip: String,
        ipv4: Vec<Ipv4Block>,
        asn: Vec<AsnRecord>,
    },
    Failed {
        ip: String,
        error: String,
    },
}

impl Resolution {
    /// The address this outcome was produced for.
    pub fn ip(&self) -> &str {
        match self {
            Resolution::Resolved { ip, .. } => ip,
            Resolution::Failed { ip, .. } => ip,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Resolution::Failed { .. })
    }
}
