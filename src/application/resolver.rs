//! Resolution Engine
//!
//! Turns a raw address into a stored outcome by querying the lookup store.
//! Stateless apart from its store dependency; shared by the queue consumer
//! and the direct-lookup API path.

use crate::domain::entities::{AsnRecord, Ipv4Block, Resolution};
use crate::domain::errors::LookupError;
use crate::domain::ports::LookupStore;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Application service implementing the resolution algorithm.
pub struct ResolverService {
    store: Arc<dyn LookupStore>,
}

impl ResolverService {
    pub fn new(store: Arc<dyn LookupStore>) -> Self {
        Self { store }
    }

    /// Resolve an address to its covering blocks and their ASN rows.
    ///
    /// Never returns an error to the caller: every failure mode is folded
    /// into a `Failed` outcome so the consumer loop and the direct-lookup
    /// handler treat success and failure uniformly.
    pub async fn resolve(&self, ip: &str) -> Resolution {
        match self.lookup(ip).await {
            Ok((ipv4, asn)) => Resolution::Resolved {
                ip: ip.to_string(),
                ipv4,
                asn,
            },
            Err(e) => {
                tracing::debug!("resolution of {} failed: {}", ip, e);
                Resolution::Failed {
                    ip: ip.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    async fn lookup(&self, ip: &str) -> Result<(Vec<Ipv4Block>, Vec<AsnRecord>), LookupError> {
        let addr: Ipv4Addr = ip
            .trim()
            .parse()
            .map_err(|_| LookupError::InvalidAddress(ip.to_string()))?;
        let ip_int = u32::from(addr);

        let blocks = self.store.blocks_covering(ip_int).await?;

        // An empty row set is an explicit failure, not an index panic.
        // Overlapping blocks should not occur in a well-formed dataset;
        // when they do, the first row in store order wins.
        let owner = blocks.first().ok_or(LookupError::NoCoverage)?;

        let asn = self.store.asn_records(owner.id).await?;
        Ok((blocks, asn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// In-memory store: one block per entry, looked up linearly.
    struct FakeStore {
        blocks: Vec<Ipv4Block>,
        asn: Vec<AsnRecord>,
        fail_asn: bool,
    }

    #[async_trait]
    impl LookupStore for FakeStore {
        async fn blocks_covering(&self, ip: u32) -> Result<Vec<Ipv4Block>, LookupError> {
            Ok(self
                .blocks
                .iter()
                .filter(|b| b.ip_start_int <= ip && ip <= b.ip_end_int)
                .cloned()
                .collect())
        }

        async fn asn_records(&self, entity_id: i64) -> Result<Vec<AsnRecord>, LookupError> {
            if self.fail_asn {
                return Err(LookupError::Store("disk on fire".to_string()));
            }
            Ok(self
                .asn
                .iter()
                .filter(|a| a.id == entity_id)
                .cloned()
                .collect())
        }
    }

    fn google_block() -> Ipv4Block {
        Ipv4Block {
            id: 1,
            ip_start: "8.8.8.0".to_string(),
            ip_end: "8.8.8.255".to_string(),
            ip_start_int: u32::from(Ipv4Addr::new(8, 8, 8, 0)),
            ip_end_int: u32::from(Ipv4Addr::new(8, 8, 8, 255)),
        }
    }

    fn service(fail_asn: bool) -> ResolverService {
        ResolverService::new(Arc::new(FakeStore {
            blocks: vec![google_block()],
            asn: vec![
                AsnRecord {
                    id: 1,
                    asn: 15169,
                    name: "GOOGLE".to_string(),
                },
                AsnRecord {
                    id: 1,
                    asn: 396982,
                    name: "GOOGLE-CLOUD".to_string(),
                },
            ],
            fail_asn,
        }))
    }

    #[tokio::test]
    async fn test_covered_address_resolves_to_its_block() {
        let outcome = service(false).resolve("8.8.8.8").await;
        match outcome {
            Resolution::Resolved { ip, ipv4, asn } => {
                assert_eq!(ip, "8.8.8.8");
                assert_eq!(ipv4, vec![google_block()]);
                assert_eq!(asn.len(), 2);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_uncovered_address_is_explicit_failure() {
        let outcome = service(false).resolve("1.2.3.4").await;
        match outcome {
            Resolution::Failed { ip, error } => {
                assert_eq!(ip, "1.2.3.4");
                assert_eq!(error, "no coverage for address");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_address_is_failure_not_panic() {
        let outcome = service(false).resolve("definitely-not-an-ip").await;
        assert!(outcome.is_failed());
    }

    #[tokio::test]
    async fn test_store_error_becomes_failed_outcome() {
        let outcome = service(true).resolve("8.8.8.8").await;
        match outcome {
            Resolution::Failed { error, .. } => {
                assert!(error.contains("disk on fire"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_range_bounds_are_inclusive() {
        let svc = service(false);
        assert!(!svc.resolve("8.8.8.0").await.is_failed());
        assert!(!svc.resolve("8.8.8.255").await.is_failed());
        assert!(svc.resolve("8.8.9.0").await.is_failed());
    }
}
