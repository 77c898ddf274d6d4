//! SQLite Lookup Store
//!
//! Implements LookupStore over the asn_db SQLite file. Queries run on the
//! blocking thread pool; a connection is opened per query, which is cheap
//! for a local read-only file and avoids holding state across awaits.

use crate::domain::entities::{AsnRecord, Ipv4Block};
use crate::domain::errors::LookupError;
use crate::domain::ports::LookupStore;
use anyhow::Result;
use async_trait::async_trait;
use rusqlite::{Connection, Row};

/// SQLite-backed dataset access.
pub struct SqliteLookupStore {
    db_path: String,
}

impl SqliteLookupStore {
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    fn query_blocks(db_path: &str, ip: u32) -> Result<Vec<Ipv4Block>> {
        let conn = Connection::open(db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, ip_start, ip_end, ip_start_int, ip_end_int
             FROM ipv4
             WHERE ip_start_int <= ?1 AND ip_end_int >= ?1",
        )?;

        let blocks = stmt
            .query_map([ip as i64], |row| Self::row_to_block(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blocks)
    }

    fn query_asn(db_path: &str, entity_id: i64) -> Result<Vec<AsnRecord>> {
        let conn = Connection::open(db_path)?;

        let mut stmt = conn.prepare("SELECT id, asn, name FROM asn WHERE id = ?1")?;

        let records = stmt
            .query_map([entity_id], |row| Self::row_to_asn(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn row_to_block(row: &Row) -> rusqlite::Result<Ipv4Block> {
        Ok(Ipv4Block {
            id: row.get(0)?,
            ip_start: row.get(1)?,
            ip_end: row.get(2)?,
            ip_start_int: row.get::<_, i64>(3)? as u32,
            ip_end_int: row.get::<_, i64>(4)? as u32,
        })
    }

    fn row_to_asn(row: &Row) -> rusqlite::Result<AsnRecord> {
        Ok(AsnRecord {
            id: row.get(0)?,
            asn: row.get::<_, i64>(1)? as u32,
            name: row.get(2)?,
        })
    }
}

#[async_trait]
impl LookupStore for SqliteLookupStore {
    async fn blocks_covering(&self, ip: u32) -> Result<Vec<Ipv4Block>, LookupError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || Self::query_blocks(&db_path, ip))
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?
            .map_err(|e| LookupError::Store(e.to_string()))
    }

    async fn asn_records(&self, entity_id: i64) -> Result<Vec<AsnRecord>, LookupError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || Self::query_asn(&db_path, entity_id))
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?
            .map_err(|e| LookupError::Store(e.to_string()))
    }
}
