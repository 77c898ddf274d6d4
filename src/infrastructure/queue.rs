//! Work Queue and Result Table
//!
//! Shared in-memory structures mutated by the API handlers and the queue
//! consumer. Neither survives a restart.

use crate::domain::entities::{ResolveRequest, Resolution};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// FIFO queue of pending resolution requests.
///
/// Unbounded and infallible on enqueue; arrival order is the only
/// ordering guarantee. A single coarse mutex keeps head removal and
/// tail insertion consistent across API handlers and the consumer.
#[derive(Default)]
pub struct WorkQueue {
    pending: Mutex<VecDeque<ResolveRequest>>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the tail. Never blocks, never fails.
    pub fn enqueue(&self, request: ResolveRequest) {
        self.pending.lock().push_back(request);
    }

    /// Remove and return the head request, if any.
    pub fn dequeue_front(&self) -> Option<ResolveRequest> {
        self.pending.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Outcome storage keyed by request uuid.
///
/// `put` overwrites (a resubmitted uuid gets last-write-wins semantics)
/// and `delete` is idempotent. Entries are never expired; callers are
/// expected to delete what they have collected.
#[derive(Default)]
pub struct ResultTable {
    entries: DashMap<String, Resolution>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an outcome, replacing any previous one for the same uuid.
    pub fn put(&self, uuid: String, outcome: Resolution) {
        self.entries.insert(uuid, outcome);
    }

    /// Fetch a copy of the stored outcome, if present.
    pub fn get(&self, uuid: &str) -> Option<Resolution> {
        self.entries.get(uuid).map(|entry| entry.clone())
    }

    /// Remove the outcome for a uuid. No error if absent.
    pub fn delete(&self, uuid: &str) {
        self.entries.remove(uuid);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(uuid: &str, ip: &str) -> ResolveRequest {
        ResolveRequest {
            uuid: uuid.to_string(),
            ip: ip.to_string(),
        }
    }

    fn failed(ip: &str, error: &str) -> Resolution {
        Resolution::Failed {
            ip: ip.to_string(),
            error: error.to_string(),
        }
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = WorkQueue::new();
        queue.enqueue(req("u1", "1.1.1.1"));
        queue.enqueue(req("u2", "2.2.2.2"));
        queue.enqueue(req("u3", "3.3.3.3"));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue_front().unwrap().uuid, "u1");
        assert_eq!(queue.dequeue_front().unwrap().uuid, "u2");
        assert_eq!(queue.dequeue_front().unwrap().uuid, "u3");
        assert!(queue.dequeue_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let queue = WorkQueue::new();
        assert!(queue.dequeue_front().is_none());
    }

    #[test]
    fn test_result_table_put_get() {
        let table = ResultTable::new();
        assert!(table.get("u1").is_none());

        table.put("u1".to_string(), failed("1.2.3.4", "no coverage for address"));
        let stored = table.get("u1").unwrap();
        assert_eq!(stored.ip(), "1.2.3.4");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_result_table_overwrite_last_write_wins() {
        let table = ResultTable::new();
        table.put("u1".to_string(), failed("1.2.3.4", "first"));
        table.put("u1".to_string(), failed("1.2.3.4", "second"));

        match table.get("u1").unwrap() {
            Resolution::Failed { error, .. } => assert_eq!(error, "second"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_result_table_delete_idempotent() {
        let table = ResultTable::new();
        table.put("u1".to_string(), failed("1.2.3.4", "x"));

        table.delete("u1");
        assert!(table.get("u1").is_none());

        // Deleting again (or deleting the never-present) is a no-op.
        table.delete("u1");
        table.delete("never-seen");
        assert!(table.is_empty());
    }
}
